//! Execution of `COMMENT ON` statements against a database catalog.
//!
//! A statement is resolved to one catalog object (or a column of a table)
//! and its comment is then stored either on the object itself or in a
//! separate comment record, depending on the kind of object.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod expression;
pub mod render;
pub mod session;
pub mod statement;

pub use error::{CommentError, ErrorCode, Result};
