use serde::{Deserialize, Serialize};

use super::id::ObjectId;

/// Trait for objects that can have comments
pub trait Commentable {
    /// Get the comment for this object
    fn comment(&self) -> &Option<String>;
}

/// Comment attached to an object that has no comment field of its own.
///
/// A record only exists while its target carries a comment; clearing the
/// comment removes the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: ObjectId,
    /// The commented object. The record does not own it.
    pub target: ObjectId,
    pub text: String,
}

impl CommentRecord {
    pub fn new(id: ObjectId, target: ObjectId, text: impl Into<String>) -> Self {
        Self {
            id,
            target,
            text: text.into(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
