//! Catalog objects and their kind-specific bodies.
use serde::{Deserialize, Serialize};

use super::comments::Commentable;
use super::id::{ObjectId, QualifiedName};
use super::kind::ObjectKind;
use crate::error::{CommentError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: data_type.to_string(),
            comment: None,
        }
    }
}

impl Commentable for Column {
    fn comment(&self) -> &Option<String> {
        &self.comment
    }
}

/// Kind-specific part of a catalog object. Only the variants of field-stored
/// kinds have a `comment` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectBody {
    Constant {
        value: String,
    },
    Constraint {
        table: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    FunctionAlias {
        java_method: String,
    },
    Index {
        table: String,
        columns: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    Role,
    Schema {
        owner: String,
    },
    Sequence {
        #[serde(default)]
        start: i64,
        #[serde(default = "default_increment")]
        increment: i64,
    },
    TableOrView {
        columns: Vec<Column>,
        /// Defining query for views, absent for base tables
        #[serde(default, skip_serializing_if = "Option::is_none")]
        view_query: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    Trigger {
        table: String,
    },
    User {
        #[serde(default)]
        admin: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    UserDataType {
        data_type: String,
    },
}

fn default_increment() -> i64 {
    1
}

impl ObjectBody {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectBody::Constant { .. } => ObjectKind::Constant,
            ObjectBody::Constraint { .. } => ObjectKind::Constraint,
            ObjectBody::FunctionAlias { .. } => ObjectKind::FunctionAlias,
            ObjectBody::Index { .. } => ObjectKind::Index,
            ObjectBody::Role => ObjectKind::Role,
            ObjectBody::Schema { .. } => ObjectKind::Schema,
            ObjectBody::Sequence { .. } => ObjectKind::Sequence,
            ObjectBody::TableOrView { .. } => ObjectKind::TableOrView,
            ObjectBody::Trigger { .. } => ObjectKind::Trigger,
            ObjectBody::User { .. } => ObjectKind::User,
            ObjectBody::UserDataType { .. } => ObjectKind::UserDataType,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogObject {
    pub id: ObjectId,
    pub name: String,
    /// Owning schema; absent for database-scoped kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(flatten)]
    pub body: ObjectBody,
}

static NO_COMMENT: Option<String> = None;

impl CatalogObject {
    pub fn new(id: ObjectId, schema: Option<&str>, name: &str, body: ObjectBody) -> Self {
        let schema = if body.kind().is_schema_scoped() {
            schema.map(str::to_string)
        } else {
            None
        };
        Self {
            id,
            name: name.to_string(),
            schema,
            body,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.body.kind()
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.schema.as_deref(), &self.name)
    }

    /// The object's own comment slot, `None` for record-stored kinds.
    pub fn comment_slot_mut(&mut self) -> Option<&mut Option<String>> {
        match &mut self.body {
            ObjectBody::Constraint { comment, .. }
            | ObjectBody::Index { comment, .. }
            | ObjectBody::TableOrView { comment, .. }
            | ObjectBody::User { comment, .. } => Some(comment),
            _ => None,
        }
    }

    pub fn columns(&self) -> &[Column] {
        match &self.body {
            ObjectBody::TableOrView { columns, .. } => columns,
            _ => &[],
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self.body, ObjectBody::TableOrView { .. })
    }

    /// Column accessor; fails when the column does not exist.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns()
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| self.column_not_found(name))
    }

    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        let err = self.column_not_found(name);
        match &mut self.body {
            ObjectBody::TableOrView { columns, .. } => {
                columns.iter_mut().find(|c| c.name == name).ok_or(err)
            }
            _ => Err(err),
        }
    }

    fn column_not_found(&self, column: &str) -> CommentError {
        CommentError::ColumnNotFound {
            column: column.to_string(),
            table: self.name.clone(),
        }
    }
}

impl Commentable for CatalogObject {
    fn comment(&self) -> &Option<String> {
        match &self.body {
            ObjectBody::Constraint { comment, .. }
            | ObjectBody::Index { comment, .. }
            | ObjectBody::TableOrView { comment, .. }
            | ObjectBody::User { comment, .. } => comment,
            _ => &NO_COMMENT,
        }
    }
}
