use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::{DEFAULT_ADMIN_USER, MAIN_SCHEMA};
use crate::error::{CommentError, Result, catalog_err};

pub mod comments;
pub mod id;
pub mod kind;
pub mod object;

pub use comments::{CommentRecord, Commentable};
pub use id::{ObjectId, QualifiedName};
pub use kind::{CommentStorage, KindDescriptor, LookupScope, ObjectKind};
pub use object::{CatalogObject, Column, ObjectBody};

/// Catalog operations a comment statement depends on.
///
/// Lookups are pure reads. Mutations are requested one at a time and the
/// implementation is responsible for persisting them.
pub trait CatalogStore {
    /// Find an object of `kind` by name. `schema` is `None` for
    /// database-scoped kinds.
    fn find_by_name(
        &self,
        kind: ObjectKind,
        schema: Option<&str>,
        name: &str,
    ) -> Option<&CatalogObject>;

    fn object(&self, id: ObjectId) -> Option<&CatalogObject>;

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut CatalogObject>;

    fn find_comment_record_for(&self, target: ObjectId) -> Option<&CommentRecord>;

    fn comment_record_mut(&mut self, id: ObjectId) -> Option<&mut CommentRecord>;

    fn add_comment_record(&mut self, record: CommentRecord) -> Result<()>;

    fn remove_comment_record(&mut self, id: ObjectId) -> Result<()>;

    /// Persist the current state of an object or comment record.
    fn update_metadata(&mut self, id: ObjectId) -> Result<()>;

    /// Hand out an id no catalog entry has used. Fails once ids run out.
    fn allocate_object_id(&mut self) -> Result<ObjectId>;

    /// Current comment of an object or one of its columns, wherever it is stored.
    fn comment_of(&self, target: ObjectId, column: Option<&str>) -> Option<String> {
        let object = self.object(target)?;
        if let Some(column) = column {
            return object.column(column).ok()?.comment().clone();
        }
        match object.kind().storage() {
            CommentStorage::Field => object.comment().clone(),
            CommentStorage::Record => self
                .find_comment_record_for(target)
                .map(|record| record.text.clone()),
        }
    }
}

/// A change applied to the catalog, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    Added(ObjectId),
    Removed(ObjectId),
    MetadataUpdated(ObjectId),
}

/// Catalog held in memory and persisted as a YAML or JSON snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Snapshot", into = "Snapshot")]
pub struct InMemoryCatalog {
    objects: BTreeMap<ObjectId, CatalogObject>,
    comments: BTreeMap<ObjectId, CommentRecord>,
    next_id: ObjectId,
    meta_version: u64,
    journal: Vec<CatalogEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    next_id: ObjectId,
    #[serde(default)]
    meta_version: u64,
    #[serde(default)]
    objects: Vec<CatalogObject>,
    #[serde(default)]
    comments: Vec<CommentRecord>,
}

/// Rebuilds the catalog from a snapshot, rejecting snapshots whose ids or
/// comment records are inconsistent.
impl TryFrom<Snapshot> for InMemoryCatalog {
    type Error = CommentError;

    fn try_from(snapshot: Snapshot) -> Result<Self> {
        let mut objects: BTreeMap<ObjectId, CatalogObject> = BTreeMap::new();
        for object in snapshot.objects {
            let id = object.id;
            if objects.insert(id, object).is_some() {
                return Err(catalog_err!("duplicate id {id} in snapshot"));
            }
        }

        let mut comments: BTreeMap<ObjectId, CommentRecord> = BTreeMap::new();
        for record in snapshot.comments {
            let (id, target) = (record.id, record.target);
            if objects.contains_key(&id) || comments.contains_key(&id) {
                return Err(catalog_err!("duplicate id {id} in snapshot"));
            }
            let kind = objects
                .get(&target)
                .map(CatalogObject::kind)
                .ok_or_else(|| catalog_err!("comment record {id} targets missing object {target}"))?;
            if kind.storage() == CommentStorage::Field {
                return Err(catalog_err!(
                    "comment record {id} targets {kind} {target}, which stores its own comment"
                ));
            }
            if let Some(other) = comments.values().find(|c| c.target == target) {
                return Err(catalog_err!(
                    "object {target} has comment records {} and {id}",
                    other.id
                ));
            }
            comments.insert(id, record);
        }

        // Never hand out an id that is already taken, even for hand-edited snapshots
        let highest = objects.keys().chain(comments.keys()).max().copied();
        let next_id = match highest {
            Some(id) if id >= snapshot.next_id => id
                .next()
                .ok_or_else(|| catalog_err!("object ids exhausted after {id}"))?,
            _ => snapshot.next_id,
        };

        Ok(Self {
            objects,
            comments,
            next_id,
            meta_version: snapshot.meta_version,
            journal: Vec::new(),
        })
    }
}

impl From<InMemoryCatalog> for Snapshot {
    fn from(catalog: InMemoryCatalog) -> Self {
        Self {
            next_id: catalog.next_id,
            meta_version: catalog.meta_version,
            objects: catalog.objects.into_values().collect(),
            comments: catalog.comments.into_values().collect(),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    /// A catalog containing only the main schema.
    pub fn new() -> Self {
        let main = CatalogObject::new(
            ObjectId(0),
            None,
            MAIN_SCHEMA,
            ObjectBody::Schema {
                owner: DEFAULT_ADMIN_USER.to_string(),
            },
        );
        Self {
            objects: BTreeMap::from([(main.id, main)]),
            comments: BTreeMap::new(),
            next_id: ObjectId(1),
            meta_version: 0,
            journal: Vec::new(),
        }
    }

    /// Load a snapshot; a missing file yields a fresh catalog.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("Catalog file {} not found, starting empty", path.display());
            return Ok(Self::new());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = if is_json(path) {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write catalog {}", path.display()))?;
        debug!("Saved catalog to {}", path.display());
        Ok(())
    }

    /// Create an object with a freshly allocated id.
    pub fn create_object(
        &mut self,
        schema: Option<&str>,
        name: &str,
        body: ObjectBody,
    ) -> Result<ObjectId> {
        let kind = body.kind();
        let schema = if kind.is_schema_scoped() {
            let schema = schema.unwrap_or(MAIN_SCHEMA);
            if self.find_by_name(ObjectKind::Schema, None, schema).is_none() {
                return Err(catalog_err!("schema {schema} does not exist"));
            }
            Some(schema)
        } else {
            None
        };
        if self.find_by_name(kind, schema, name).is_some() {
            return Err(catalog_err!(
                "{kind} {} already exists",
                QualifiedName::new(schema, name)
            ));
        }

        let id = self.allocate_object_id()?;
        self.objects
            .insert(id, CatalogObject::new(id, schema, name, body));
        self.record(CatalogEvent::Added(id));
        Ok(id)
    }

    /// Drop an object together with its comment record.
    pub fn drop_object(&mut self, id: ObjectId) -> Result<CatalogObject> {
        let object = self
            .objects
            .remove(&id)
            .ok_or_else(|| catalog_err!("object {id} does not exist"))?;
        if let Some(record_id) = self.find_comment_record_for(id).map(|r| r.id) {
            self.remove_comment_record(record_id)?;
        }
        self.record(CatalogEvent::Removed(id));
        Ok(object)
    }

    pub fn objects(&self) -> impl Iterator<Item = &CatalogObject> {
        self.objects.values()
    }

    pub fn comment_records(&self) -> impl Iterator<Item = &CommentRecord> {
        self.comments.values()
    }

    pub fn meta_version(&self) -> u64 {
        self.meta_version
    }

    /// Events applied since the catalog was created or loaded.
    pub fn journal(&self) -> &[CatalogEvent] {
        &self.journal
    }

    fn record(&mut self, event: CatalogEvent) {
        debug!(?event, "catalog change");
        self.meta_version += 1;
        self.journal.push(event);
    }
}

impl CatalogStore for InMemoryCatalog {
    fn find_by_name(
        &self,
        kind: ObjectKind,
        schema: Option<&str>,
        name: &str,
    ) -> Option<&CatalogObject> {
        self.objects
            .values()
            .find(|o| o.kind() == kind && o.schema.as_deref() == schema && o.name == name)
    }

    fn object(&self, id: ObjectId) -> Option<&CatalogObject> {
        self.objects.get(&id)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut CatalogObject> {
        self.objects.get_mut(&id)
    }

    fn find_comment_record_for(&self, target: ObjectId) -> Option<&CommentRecord> {
        self.comments.values().find(|c| c.target == target)
    }

    fn comment_record_mut(&mut self, id: ObjectId) -> Option<&mut CommentRecord> {
        self.comments.get_mut(&id)
    }

    fn add_comment_record(&mut self, record: CommentRecord) -> Result<()> {
        let kind = self
            .objects
            .get(&record.target)
            .map(CatalogObject::kind)
            .ok_or_else(|| catalog_err!("comment target {} does not exist", record.target))?;
        if kind.storage() == CommentStorage::Field {
            return Err(catalog_err!(
                "{kind} {} stores its own comment",
                record.target
            ));
        }
        if let Some(existing) = self.find_comment_record_for(record.target) {
            return Err(catalog_err!(
                "object {} already has comment record {}",
                record.target,
                existing.id
            ));
        }
        let id = record.id;
        self.comments.insert(id, record);
        self.record(CatalogEvent::Added(id));
        Ok(())
    }

    fn remove_comment_record(&mut self, id: ObjectId) -> Result<()> {
        self.comments
            .remove(&id)
            .ok_or_else(|| catalog_err!("comment record {id} does not exist"))?;
        self.record(CatalogEvent::Removed(id));
        Ok(())
    }

    fn update_metadata(&mut self, id: ObjectId) -> Result<()> {
        if !self.objects.contains_key(&id) && !self.comments.contains_key(&id) {
            return Err(catalog_err!("no catalog entry {id} to update"));
        }
        self.record(CatalogEvent::MetadataUpdated(id));
        Ok(())
    }

    fn allocate_object_id(&mut self) -> Result<ObjectId> {
        let id = self.next_id;
        self.next_id = id
            .next()
            .ok_or_else(|| catalog_err!("object ids exhausted after {id}"))?;
        Ok(id)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
