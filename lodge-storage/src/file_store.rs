//! The JSON-file storage engine.
//!
//! One [`FileStore`] holds the registry of every live entity, keyed by
//! `"<tag>.<id>"`. `save` flushes the whole registry to a single JSON
//! document; `reload` rehydrates typed entities from it. Nothing is
//! written implicitly: mutations only reach disk on an explicit save.

use crate::error::StorageResult;
use lodge_model::{Entity, ModelError, ModelKind};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed backing-file name used by the console.
pub const STORE_FILE: &str = "file.json";

/// In-memory entity registry plus its disk contract.
///
/// One logical store exists per process; the console owns it and passes
/// it to the shell. Tests build their own against temp paths with
/// [`FileStore::with_path`].
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    objects: BTreeMap<String, Entity>,
}

impl FileStore {
    /// Creates an empty store backed by [`STORE_FILE`] in the current
    /// directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(STORE_FILE)
    }

    /// Creates an empty store backed by an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            objects: BTreeMap::new(),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full key-to-entity mapping, in key order.
    #[must_use]
    pub fn all(&self) -> &BTreeMap<String, Entity> {
        &self.objects
    }

    /// Entities of one variant, in key order.
    pub fn all_of(&self, kind: ModelKind) -> impl Iterator<Item = &Entity> {
        self.objects
            .values()
            .filter(move |entity| entity.kind() == kind)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Registers an entity under its composite key, replacing any entry
    /// already there. `None` is accepted and ignored.
    pub fn insert(&mut self, entity: impl Into<Option<Entity>>) {
        if let Some(entity) = entity.into() {
            self.objects.insert(entity.key(), entity);
        }
    }

    /// Looks up one entity by variant and id.
    #[must_use]
    pub fn get(&self, kind: ModelKind, id: &str) -> Option<&Entity> {
        self.objects.get(&composite_key(kind, id))
    }

    /// Mutable lookup by variant and id.
    pub fn get_mut(&mut self, kind: ModelKind, id: &str) -> Option<&mut Entity> {
        self.objects.get_mut(&composite_key(kind, id))
    }

    /// Removes one entity, returning it if it was registered.
    pub fn remove(&mut self, kind: ModelKind, id: &str) -> Option<Entity> {
        self.objects.remove(&composite_key(kind, id))
    }

    /// Flushes the whole registry to the backing file as one JSON
    /// object. An empty registry writes `{}`.
    ///
    /// The write is atomic: the document lands in a sibling temp file,
    /// is synced, then renamed over the target. Readers never observe a
    /// partially written file.
    ///
    /// # Errors
    ///
    /// Any IO or serialization failure. Save errors are fatal to the
    /// caller; there is no fallback path for a registry that cannot
    /// reach disk.
    pub fn save(&self) -> StorageResult<()> {
        let mut document = Map::new();
        for (key, entity) in &self.objects {
            document.insert(key.clone(), Value::Object(entity.to_record()));
        }
        let payload = serde_json::to_string(&document)?;

        let tmp = tmp_path(&self.path);
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        debug!(count = self.objects.len(), path = %self.path.display(), "registry saved");
        Ok(())
    }

    /// Rehydrates entities from the backing file.
    ///
    /// A missing, empty, or top-level-unparsable file is treated as an
    /// empty document and leaves the registry unchanged. Individual
    /// entries get no such leniency: every record is validated and
    /// reconstructed before anything is applied, so a failed reload
    /// leaves the registry exactly as it was. Each loaded entity then
    /// replaces whatever the registry held under its key; keys absent
    /// from the file are retained.
    ///
    /// # Errors
    ///
    /// [`StorageError::Model`] for an entry whose class tag is unknown,
    /// whose timestamps are malformed, or whose shape is invalid;
    /// [`StorageError::Io`] for read failures other than a missing file.
    ///
    /// [`StorageError::Model`]: crate::StorageError::Model
    /// [`StorageError::Io`]: crate::StorageError::Io
    pub fn reload(&mut self) -> StorageResult<()> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backing file; nothing to load");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            debug!(path = %self.path.display(), "backing file is empty; nothing to load");
            return Ok(());
        }
        let document: Map<String, Value> = match serde_json::from_str(&text) {
            Ok(document) => document,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "backing file is not a JSON object; treating as empty");
                return Ok(());
            }
        };

        let mut loaded = Vec::with_capacity(document.len());
        for (key, value) in &document {
            let Value::Object(record) = value else {
                return Err(ModelError::InvalidRecord(format!(
                    "entry {key:?} is not an object"
                ))
                .into());
            };
            loaded.push((key.clone(), Entity::from_tagged_record(record)?));
        }
        let count = loaded.len();
        self.objects.extend(loaded);
        debug!(count, path = %self.path.display(), "registry reloaded");
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The composite registry key for a variant and id.
#[must_use]
pub fn composite_key(kind: ModelKind, id: &str) -> String {
    format!("{}.{id}", kind.tag())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
