//! SQL rendering for comments present in a catalog

use serde::Serialize;

use crate::catalog::{CatalogStore, Commentable, CommentStorage, InMemoryCatalog, ObjectKind};
use crate::render::{RenderedSql, quote_path, render_comment_sql};

/// One comment found in the catalog, wherever it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    pub kind: ObjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub text: String,
    /// Id of the comment record, for record-stored kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<u32>,
}

/// Every comment in the catalog, in object id order; column comments follow
/// their table.
pub fn list_comments(catalog: &InMemoryCatalog) -> Vec<CommentEntry> {
    let mut entries = Vec::new();

    for object in catalog.objects() {
        let kind = object.kind();
        let entry = |text: &str, column: Option<&str>, record: Option<u32>| CommentEntry {
            kind,
            schema: object.schema.clone(),
            name: object.name.clone(),
            column: column.map(str::to_string),
            text: text.to_string(),
            record,
        };

        match kind.storage() {
            CommentStorage::Field => {
                if let Some(text) = object.comment() {
                    entries.push(entry(text, None, None));
                }
            }
            CommentStorage::Record => {
                if let Some(record) = catalog.find_comment_record_for(object.id) {
                    entries.push(entry(&record.text, None, Some(record.id.0)));
                }
            }
        }

        for column in object.columns() {
            if let Some(text) = column.comment() {
                entries.push(entry(text, Some(&column.name), None));
            }
        }
    }

    entries
}

pub fn render_comment_entry(entry: &CommentEntry) -> RenderedSql {
    let (keyword, identifier) = match &entry.column {
        Some(column) => (
            "COLUMN",
            quote_path([
                entry.schema.as_deref(),
                Some(entry.name.as_str()),
                Some(column.as_str()),
            ]),
        ),
        None => (
            entry.kind.keyword(),
            quote_path([entry.schema.as_deref(), Some(entry.name.as_str())]),
        ),
    };
    render_comment_sql(keyword, &identifier, Some(&entry.text))
}
