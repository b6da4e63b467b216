//! `dbcomment comment`: run one COMMENT ON statement against the catalog
//! snapshot.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::catalog::{InMemoryCatalog, ObjectKind};
use crate::config::Config;
use crate::expression::Expression;
use crate::render::Safety;
use crate::statement::{DefineStatement, SetComment};

/// Target and text of a comment statement, as given on the command line.
#[derive(Debug, Clone)]
pub struct CommentRequest {
    pub kind: String,
    pub schema: Option<String>,
    pub name: String,
    pub column: Option<String>,
    /// `None` clears the comment
    pub text: Option<String>,
}

impl CommentRequest {
    pub fn to_statement(&self) -> Result<SetComment> {
        let kind: ObjectKind = self.kind.parse()?;
        let mut statement = SetComment::new(
            kind,
            self.name.clone(),
            Expression::from_text(self.text.clone()),
        );
        if let Some(schema) = &self.schema {
            statement = statement.with_schema(schema.clone());
        }
        if let Some(column) = &self.column {
            statement = statement.with_column(column.clone());
        }
        Ok(statement)
    }
}

pub fn cmd_comment(config: &Config, request: &CommentRequest) -> Result<()> {
    let statement = request.to_statement()?;
    let path = &config.catalog.file;

    let mut catalog = InMemoryCatalog::load(path)?;
    let mut session = config.session.open_session();

    let rendered = statement.to_sql();
    let sql = rendered.sql;
    if rendered.safety == Safety::Destructive {
        warn!("Clearing comment: {}", sql);
    } else {
        info!("Executing {}", sql);
    }
    let update_count = statement
        .update(&mut session, &mut catalog)
        .with_context(|| format!("{} failed", statement.statement_type()))?;

    catalog.save(path)?;
    println!("{sql}");
    info!(
        "{} completed with update count {}",
        statement.statement_type(),
        update_count
    );
    Ok(())
}
