//! Object kinds a comment can be attached to, and how each one is looked up
//! and persisted.

use crate::error::{CommentError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Constant,
    Constraint,
    FunctionAlias,
    Index,
    Role,
    Schema,
    Sequence,
    TableOrView,
    Trigger,
    User,
    UserDataType,
}

/// Where a lookup by name is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    /// Inside a named schema; the session's current schema when none is given
    Schema,
    /// Directly in the database; any schema qualifier is discarded
    Database,
}

/// How the comment of an object is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStorage {
    /// The object carries its own comment field
    Field,
    /// A separate comment record points at the object
    Record,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    pub scope: LookupScope,
    pub not_found: ErrorCode,
    pub storage: CommentStorage,
    /// Keyword used in `COMMENT ON <keyword> ...`
    pub keyword: &'static str,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 11] = [
        ObjectKind::Constant,
        ObjectKind::Constraint,
        ObjectKind::FunctionAlias,
        ObjectKind::Index,
        ObjectKind::Role,
        ObjectKind::Schema,
        ObjectKind::Sequence,
        ObjectKind::TableOrView,
        ObjectKind::Trigger,
        ObjectKind::User,
        ObjectKind::UserDataType,
    ];

    pub const fn descriptor(self) -> KindDescriptor {
        use CommentStorage::*;
        use LookupScope::*;

        let (scope, not_found, storage, keyword) = match self {
            ObjectKind::Constant => (Schema, ErrorCode::ConstantNotFound, Record, "CONSTANT"),
            ObjectKind::Constraint => (Schema, ErrorCode::ConstraintNotFound, Field, "CONSTRAINT"),
            ObjectKind::FunctionAlias => (Schema, ErrorCode::FunctionAliasNotFound, Record, "ALIAS"),
            ObjectKind::Index => (Schema, ErrorCode::IndexNotFound, Field, "INDEX"),
            ObjectKind::Role => (Database, ErrorCode::RoleNotFound, Record, "ROLE"),
            ObjectKind::Schema => (Database, ErrorCode::SchemaNotFound, Record, "SCHEMA"),
            ObjectKind::Sequence => (Schema, ErrorCode::SequenceNotFound, Record, "SEQUENCE"),
            ObjectKind::TableOrView => (Schema, ErrorCode::TableOrViewNotFound, Field, "TABLE"),
            ObjectKind::Trigger => (Schema, ErrorCode::TriggerNotFound, Record, "TRIGGER"),
            ObjectKind::User => (Database, ErrorCode::UserNotFound, Field, "USER"),
            ObjectKind::UserDataType => (Database, ErrorCode::ObjectNotFound, Record, "DOMAIN"),
        };

        KindDescriptor {
            scope,
            not_found,
            storage,
            keyword,
        }
    }

    pub fn scope(self) -> LookupScope {
        self.descriptor().scope
    }

    pub fn storage(self) -> CommentStorage {
        self.descriptor().storage
    }

    pub fn keyword(self) -> &'static str {
        self.descriptor().keyword
    }

    pub fn is_schema_scoped(self) -> bool {
        self.scope() == LookupScope::Schema
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ObjectKind {
    type Err = CommentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_uppercase().replace(['-', '_'], " ").as_str() {
            "CONSTANT" => ObjectKind::Constant,
            "CONSTRAINT" => ObjectKind::Constraint,
            "ALIAS" | "FUNCTION" | "FUNCTION ALIAS" => ObjectKind::FunctionAlias,
            "INDEX" => ObjectKind::Index,
            "ROLE" => ObjectKind::Role,
            "SCHEMA" => ObjectKind::Schema,
            "SEQUENCE" => ObjectKind::Sequence,
            "TABLE" | "VIEW" | "TABLE OR VIEW" => ObjectKind::TableOrView,
            "TRIGGER" => ObjectKind::Trigger,
            "USER" => ObjectKind::User,
            "DOMAIN" | "TYPE" | "DATATYPE" | "USER DATA TYPE" => ObjectKind::UserDataType,
            _ => return Err(CommentError::Unsupported(format!("COMMENT ON {s}"))),
        };
        Ok(kind)
    }
}
