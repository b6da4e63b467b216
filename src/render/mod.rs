use itertools::Itertools;

pub mod comment;

pub use comment::{CommentEntry, list_comments, render_comment_entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct RenderedSql {
    pub safety: Safety,
    pub sql: String,
}

impl RenderedSql {
    pub fn new(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Safe,
        }
    }

    pub fn destructive(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Destructive,
        }
    }
}

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Quoted, dot separated identifier path, skipping absent parts.
pub fn quote_path<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(quote_ident)
        .join(".")
}

/// Generic helper for rendering comment SQL. Clearing a comment is reported
/// as destructive.
pub fn render_comment_sql(
    object_type: &str,
    identifier: &str,
    comment: Option<&str>,
) -> RenderedSql {
    match comment {
        Some(comment_text) => RenderedSql::new(format!(
            "COMMENT ON {} {} IS {};",
            object_type,
            identifier,
            escape_string(comment_text)
        )),
        None => RenderedSql::destructive(format!(
            "COMMENT ON {} {} IS NULL;",
            object_type, identifier
        )),
    }
}
