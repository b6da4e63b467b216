//! `COMMENT ON <kind> <name> IS <expression>`

use tracing::info;

use super::reconcile::reconcile;
use super::resolve::Resolver;
use super::{DefineStatement, StatementType};
use crate::catalog::{CatalogStore, ObjectKind};
use crate::constants::UPDATE_COUNT_NONE;
use crate::error::Result;
use crate::expression::Expression;
use crate::render::{RenderedSql, quote_path, render_comment_sql};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetComment {
    pub kind: ObjectKind,
    pub schema: Option<String>,
    pub name: String,
    pub column: Option<String>,
    pub expression: Expression,
}

impl SetComment {
    pub fn new(kind: ObjectKind, name: impl Into<String>, expression: Expression) -> Self {
        Self {
            kind,
            schema: None,
            name: name.into(),
            column: None,
            expression,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Target a column of the named table instead of the table itself.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn is_column(&self) -> bool {
        self.column.is_some()
    }

    /// The statement as SQL, with the expression folded.
    pub fn to_sql(&self) -> RenderedSql {
        let schema = self.schema.as_deref().filter(|_| self.kind.is_schema_scoped());
        let (keyword, identifier) = match &self.column {
            Some(column) => (
                "COLUMN",
                quote_path([schema, Some(self.name.as_str()), Some(column.as_str())]),
            ),
            None => (self.kind.keyword(), quote_path([schema, Some(self.name.as_str())])),
        };
        let text = self.expression.clone().value().as_string();
        render_comment_sql(keyword, &identifier, text.as_deref())
    }
}

impl DefineStatement for SetComment {
    fn statement_type(&self) -> StatementType {
        StatementType::Comment
    }

    fn update(&self, session: &mut dyn Session, catalog: &mut dyn CatalogStore) -> Result<i32> {
        self.commit_pending(session)?;
        session.user().check_admin()?;

        let schema = self
            .schema
            .as_deref()
            .unwrap_or_else(|| session.current_schema_name());
        let target = Resolver::new(&*catalog, schema).resolve(
            self.kind,
            Some(schema),
            &self.name,
            self.column.as_deref(),
        )?;

        let text = self.expression.clone().optimize().value().as_string();
        let change = reconcile(catalog, &target, text)?;

        info!(
            statement = %self.statement_type(),
            target = %target.name,
            column = ?target.column,
            expression = %self.expression,
            ?change,
            "applying comment"
        );
        change.apply(catalog)?;

        Ok(UPDATE_COUNT_NONE)
    }
}
