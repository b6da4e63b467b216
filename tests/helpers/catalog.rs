use dbcomment::catalog::{CatalogStore, Column, InMemoryCatalog, ObjectBody, ObjectId, ObjectKind};
use dbcomment::expression::Expression;
use dbcomment::session::{LocalSession, User};
use dbcomment::statement::{DefineStatement, SetComment};
use dbcomment::{CommentError, Result};

/// A catalog with one object of every kind, plus a second schema `SALES`.
pub fn sample_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();

    catalog
        .create_object(None, "SALES", ObjectBody::Schema { owner: "SA".into() })
        .expect("schema");
    catalog
        .create_object(
            None,
            "T1",
            ObjectBody::TableOrView {
                columns: vec![Column::new("ID", "INT"), Column::new("TOTAL", "DECIMAL")],
                view_query: None,
                comment: None,
            },
        )
        .expect("table");
    catalog
        .create_object(
            None,
            "V1",
            ObjectBody::TableOrView {
                columns: vec![Column::new("ID", "INT")],
                view_query: Some("SELECT ID FROM T1".into()),
                comment: None,
            },
        )
        .expect("view");
    catalog
        .create_object(
            None,
            "IDX_T1_TOTAL",
            ObjectBody::Index {
                table: "T1".into(),
                columns: vec!["TOTAL".into()],
                comment: None,
            },
        )
        .expect("index");
    catalog
        .create_object(
            None,
            "PK_T1",
            ObjectBody::Constraint {
                table: "T1".into(),
                comment: None,
            },
        )
        .expect("constraint");
    catalog
        .create_object(None, "MAX_ITEMS", ObjectBody::Constant { value: "100".into() })
        .expect("constant");
    catalog
        .create_object(
            None,
            "NOW_UTC",
            ObjectBody::FunctionAlias {
                java_method: "java.time.Instant.now".into(),
            },
        )
        .expect("alias");
    catalog
        .create_object(None, "READERS", ObjectBody::Role)
        .expect("role");
    catalog
        .create_object(
            None,
            "SEQ1",
            ObjectBody::Sequence {
                start: 1,
                increment: 1,
            },
        )
        .expect("sequence");
    catalog
        .create_object(None, "T1_AUDIT", ObjectBody::Trigger { table: "T1".into() })
        .expect("trigger");
    catalog
        .create_object(
            None,
            "ANALYST",
            ObjectBody::User {
                admin: false,
                comment: None,
            },
        )
        .expect("user");
    catalog
        .create_object(
            None,
            "EMAIL",
            ObjectBody::UserDataType {
                data_type: "VARCHAR(320)".into(),
            },
        )
        .expect("domain");
    catalog
        .create_object(
            Some("SALES"),
            "REGIONS",
            ObjectBody::TableOrView {
                columns: vec![Column::new("CODE", "CHAR(2)")],
                view_query: None,
                comment: None,
            },
        )
        .expect("sales table");

    catalog
}

pub fn id_of(catalog: &InMemoryCatalog, kind: ObjectKind, name: &str) -> ObjectId {
    let schema = kind.is_schema_scoped().then_some("PUBLIC");
    catalog
        .find_by_name(kind, schema, name)
        .unwrap_or_else(|| panic!("{kind} {name} missing from fixture"))
        .id
}

/// Run `COMMENT ON <kind> <name> IS <text>` as the administrator.
pub fn comment_on(
    catalog: &mut InMemoryCatalog,
    kind: ObjectKind,
    name: &str,
    text: Option<&str>,
) -> Result<i32> {
    let statement = SetComment::new(kind, name, Expression::from_text(text.map(str::to_string)));
    statement.update(&mut LocalSession::admin(), catalog)
}

pub fn guest_session() -> LocalSession {
    LocalSession::new(User::new("GUEST", false), "PUBLIC")
}

pub fn is_not_found(err: &CommentError, name: &str) -> bool {
    matches!(err, CommentError::NotFound { name: n, .. } if n == name)
}
