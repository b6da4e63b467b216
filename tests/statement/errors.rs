//! Failures surfaced by comment statements.

use crate::helpers::catalog::{comment_on, guest_session, is_not_found, sample_catalog};
use dbcomment::catalog::ObjectKind;
use dbcomment::expression::Expression;
use dbcomment::statement::{DefineStatement, SetComment};
use dbcomment::{CommentError, ErrorCode};
use rstest::rstest;

#[rstest]
#[case::constant(ObjectKind::Constant, ErrorCode::ConstantNotFound)]
#[case::constraint(ObjectKind::Constraint, ErrorCode::ConstraintNotFound)]
#[case::function_alias(ObjectKind::FunctionAlias, ErrorCode::FunctionAliasNotFound)]
#[case::index(ObjectKind::Index, ErrorCode::IndexNotFound)]
#[case::role(ObjectKind::Role, ErrorCode::RoleNotFound)]
#[case::schema(ObjectKind::Schema, ErrorCode::SchemaNotFound)]
#[case::sequence(ObjectKind::Sequence, ErrorCode::SequenceNotFound)]
#[case::table(ObjectKind::TableOrView, ErrorCode::TableOrViewNotFound)]
#[case::trigger(ObjectKind::Trigger, ErrorCode::TriggerNotFound)]
#[case::user(ObjectKind::User, ErrorCode::UserNotFound)]
#[case::user_data_type(ObjectKind::UserDataType, ErrorCode::ObjectNotFound)]
fn test_missing_object_reports_kind_code(#[case] kind: ObjectKind, #[case] code: ErrorCode) {
    let mut catalog = sample_catalog();

    let err = comment_on(&mut catalog, kind, "ghost", Some("boo")).unwrap_err();

    assert_eq!(err, CommentError::not_found(code, "ghost"));
    assert_eq!(err.error_code(), code);
}

#[test]
fn test_missing_table_carries_name() {
    let mut catalog = sample_catalog();

    let err = comment_on(&mut catalog, ObjectKind::TableOrView, "ghost", Some("x")).unwrap_err();

    assert!(is_not_found(&err, "ghost"));
    assert_eq!(err.error_code().code(), 42102);
}

#[test]
fn test_missing_column_is_not_a_missing_table() {
    let mut catalog = sample_catalog();
    let statement = SetComment::new(ObjectKind::TableOrView, "T1", Expression::text("x"))
        .with_column("col1");

    let err = statement
        .update(&mut dbcomment::session::LocalSession::admin(), &mut catalog)
        .unwrap_err();

    assert_eq!(
        err,
        CommentError::ColumnNotFound {
            column: "col1".into(),
            table: "T1".into()
        }
    );
    assert_ne!(err.error_code(), ErrorCode::TableOrViewNotFound);
}

#[test]
fn test_non_admin_is_rejected_after_commit() {
    let mut catalog = sample_catalog();
    let before = catalog.journal().len();
    let mut session = guest_session();
    session.begin_work();

    let statement = SetComment::new(ObjectKind::TableOrView, "T1", Expression::text("x"));
    let err = statement.update(&mut session, &mut catalog).unwrap_err();

    assert_eq!(
        err,
        CommentError::PermissionDenied {
            user: "GUEST".into()
        }
    );
    // The commit already happened; nothing reached the catalog
    assert!(!session.has_pending_transaction());
    assert_eq!(catalog.journal().len(), before);
}

#[test]
fn test_unknown_schema() {
    let mut catalog = sample_catalog();
    let statement =
        SetComment::new(ObjectKind::Sequence, "SEQ1", Expression::text("x")).with_schema("ARCHIVE");

    let err = statement
        .update(&mut dbcomment::session::LocalSession::admin(), &mut catalog)
        .unwrap_err();

    assert_eq!(err, CommentError::not_found(ErrorCode::SchemaNotFound, "ARCHIVE"));
}

#[test]
fn test_unknown_kind_is_unsupported() {
    let err = "AGGREGATE".parse::<ObjectKind>().unwrap_err();
    assert!(matches!(err, CommentError::Unsupported(_)));
    assert_eq!(err.error_code().code(), 50100);
}
