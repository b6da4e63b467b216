pub mod reconcile;
pub mod resolve;
pub mod set_comment;

pub use reconcile::{CommentChange, reconcile};
pub use resolve::{ResolvedTarget, Resolver};
pub use set_comment::SetComment;

use std::fmt;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementType {
    Comment,
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementType::Comment => f.write_str("COMMENT"),
        }
    }
}

/// Statements that change the database definition.
///
/// Definition statements run in a transaction of their own, so any work the
/// session has pending is committed before they start.
pub trait DefineStatement {
    fn statement_type(&self) -> StatementType;

    /// Execute the statement and return its update count.
    fn update(&self, session: &mut dyn Session, catalog: &mut dyn CatalogStore) -> Result<i32>;

    fn commit_pending(&self, session: &mut dyn Session) -> Result<()> {
        session.commit(true)
    }
}
