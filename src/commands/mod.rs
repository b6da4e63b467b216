pub mod comment;
pub mod show;

// Re-export all command functions
pub use comment::{CommentRequest, cmd_comment};
pub use show::{ShowFormat, cmd_show};
