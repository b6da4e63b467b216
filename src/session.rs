//! Session collaborator: transaction boundary, current user and schema.

use tracing::debug;

use crate::constants::{DEFAULT_ADMIN_USER, MAIN_SCHEMA};
use crate::error::{CommentError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub admin: bool,
}

impl User {
    pub fn new(name: impl Into<String>, admin: bool) -> Self {
        Self {
            name: name.into(),
            admin,
        }
    }

    pub fn check_admin(&self) -> Result<()> {
        if self.admin {
            Ok(())
        } else {
            Err(CommentError::PermissionDenied {
                user: self.name.clone(),
            })
        }
    }
}

pub trait Session {
    /// Commit the open transaction. `force` commits even when the session
    /// is in auto-commit mode.
    fn commit(&mut self, force: bool) -> Result<()>;

    fn user(&self) -> &User;

    fn current_schema_name(&self) -> &str;
}

/// Single-connection session used by the command line and tests.
///
/// The session runs in auto-commit mode, so only forced commits end the
/// open transaction.
#[derive(Debug, Clone)]
pub struct LocalSession {
    user: User,
    current_schema: String,
    pending: bool,
    commits: u32,
}

impl LocalSession {
    pub fn new(user: User, current_schema: impl Into<String>) -> Self {
        Self {
            user,
            current_schema: current_schema.into(),
            pending: false,
            commits: 0,
        }
    }

    /// Session of the built-in administrator in the main schema.
    pub fn admin() -> Self {
        Self::new(User::new(DEFAULT_ADMIN_USER, true), MAIN_SCHEMA)
    }

    pub fn set_current_schema(&mut self, schema: impl Into<String>) {
        self.current_schema = schema.into();
    }

    /// Mark work done since the last commit.
    pub fn begin_work(&mut self) {
        self.pending = true;
    }

    pub fn has_pending_transaction(&self) -> bool {
        self.pending
    }

    pub fn commit_count(&self) -> u32 {
        self.commits
    }
}

impl Session for LocalSession {
    fn commit(&mut self, force: bool) -> Result<()> {
        if !force {
            return Ok(());
        }
        if self.pending {
            debug!(user = %self.user.name, "committing pending transaction");
        }
        self.pending = false;
        self.commits += 1;
        Ok(())
    }

    fn user(&self) -> &User {
        &self.user
    }

    fn current_schema_name(&self) -> &str {
        &self.current_schema
    }
}
