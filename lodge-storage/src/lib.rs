//! JSON-file storage engine for lodge.
//!
//! Provides the process-wide entity registry and its durability
//! contract: every live entity lives in one [`FileStore`], `save`
//! flushes the whole registry to a single JSON document, `reload`
//! rehydrates typed entities from it.
//!
//! # Architecture
//!
//! - Entities cross the disk boundary only through their record form,
//!   one JSON object per composite `"<tag>.<id>"` key
//! - Reload is lenient about the file as a whole (missing, empty, or
//!   unparsable reads as an empty document) but strict about individual
//!   entries
//! - Writes are atomic: temp file, sync, rename

mod error;
mod file_store;

pub use error::{StorageError, StorageResult};
pub use file_store::{FileStore, STORE_FILE, composite_key};
