//! Locate the object a comment statement targets.

use tracing::debug;

use crate::catalog::{CatalogStore, LookupScope, ObjectId, ObjectKind, QualifiedName};
use crate::error::{CommentError, ErrorCode, Result};

/// Handle to a resolved comment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub name: QualifiedName,
    /// Set when the comment goes on a column of the resolved table
    pub column: Option<String>,
}

impl ResolvedTarget {
    pub fn is_column(&self) -> bool {
        self.column.is_some()
    }
}

/// Read-only object lookup. `default_schema` is used for schema-scoped kinds
/// when the statement names no schema.
pub struct Resolver<'a> {
    catalog: &'a dyn CatalogStore,
    default_schema: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a dyn CatalogStore, default_schema: &'a str) -> Self {
        Self {
            catalog,
            default_schema,
        }
    }

    pub fn resolve(
        &self,
        kind: ObjectKind,
        schema: Option<&str>,
        name: &str,
        column: Option<&str>,
    ) -> Result<ResolvedTarget> {
        let descriptor = kind.descriptor();

        let schema = match descriptor.scope {
            LookupScope::Database => None,
            LookupScope::Schema => {
                let schema = schema.unwrap_or(self.default_schema);
                if self
                    .catalog
                    .find_by_name(ObjectKind::Schema, None, schema)
                    .is_none()
                {
                    return Err(CommentError::not_found(ErrorCode::SchemaNotFound, schema));
                }
                Some(schema)
            }
        };

        let object = self
            .catalog
            .find_by_name(kind, schema, name)
            .ok_or_else(|| CommentError::not_found(descriptor.not_found, name))?;

        let column = match column {
            Some(column) => {
                if !object.is_table() {
                    return Err(CommentError::Unsupported(format!(
                        "COMMENT ON COLUMN of {kind} {name}"
                    )));
                }
                Some(object.column(column)?.name.clone())
            }
            None => None,
        };

        debug!(%kind, id = %object.id, ?column, "resolved comment target");
        Ok(ResolvedTarget {
            id: object.id,
            kind,
            name: object.qualified_name(),
            column,
        })
    }
}
