//! Decide how a new comment text is persisted for a resolved target.

use tracing::{debug, info};

use super::resolve::ResolvedTarget;
use crate::catalog::{CatalogStore, CommentRecord, CommentStorage, ObjectId};
use crate::error::{Result, catalog_err};

/// Persistence request produced by [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentChange {
    /// Comment cleared on an object that never had one
    Unchanged,
    /// Rewrite the stored metadata of an object or comment record
    UpdateMetadata(ObjectId),
    AddRecord(CommentRecord),
    RemoveRecord(ObjectId),
}

impl CommentChange {
    pub fn apply(self, catalog: &mut dyn CatalogStore) -> Result<()> {
        match self {
            CommentChange::Unchanged => Ok(()),
            CommentChange::UpdateMetadata(id) => catalog.update_metadata(id),
            CommentChange::AddRecord(record) => catalog.add_comment_record(record),
            CommentChange::RemoveRecord(id) => catalog.remove_comment_record(id),
        }
    }
}

/// Bring the stored comment of `target` in line with `text`, `None` meaning
/// the comment is cleared.
///
/// Columns and field-stored kinds get the text written into their own
/// comment field. Other kinds keep a separate [`CommentRecord`], which is
/// created, rewritten or removed here depending on whether one exists.
pub fn reconcile(
    catalog: &mut dyn CatalogStore,
    target: &ResolvedTarget,
    text: Option<String>,
) -> Result<CommentChange> {
    if target.is_column() || target.kind.storage() == CommentStorage::Field {
        let object = catalog
            .object_mut(target.id)
            .ok_or_else(|| catalog_err!("object {} does not exist", target.id))?;
        match &target.column {
            Some(column) => object.column_mut(column)?.comment = text,
            None => {
                let slot = object
                    .comment_slot_mut()
                    .ok_or_else(|| catalog_err!("{} has no comment field", target.kind))?;
                *slot = text;
            }
        }
        debug!(id = %target.id, "comment stored on object");
        return Ok(CommentChange::UpdateMetadata(target.id));
    }

    let existing = catalog.find_comment_record_for(target.id).map(|r| r.id);
    let change = match (existing, text) {
        (None, None) => {
            debug!(target = %target.name, "no comment to clear");
            CommentChange::Unchanged
        }
        (None, Some(text)) => {
            let id = catalog.allocate_object_id()?;
            info!(%id, target = %target.name, "creating comment record");
            CommentChange::AddRecord(CommentRecord::new(id, target.id, text))
        }
        (Some(id), None) => {
            info!(%id, target = %target.name, "removing comment record");
            CommentChange::RemoveRecord(id)
        }
        (Some(id), Some(text)) => {
            catalog
                .comment_record_mut(id)
                .ok_or_else(|| catalog_err!("comment record {id} does not exist"))?
                .set_text(text);
            debug!(%id, target = %target.name, "updating comment record");
            CommentChange::UpdateMetadata(id)
        }
    };
    Ok(change)
}
