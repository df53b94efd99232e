//! Core value types for the lodge persistence engine.
//!
//! This crate defines the types everything else builds on:
//! - [`EntityId`]: random entity identifiers in canonical text form
//! - [`Timestamp`]: UTC wall-clock time with microsecond precision and
//!   the backing file's fixed ISO-8601 text form
//!
//! Domain concerns (entity variants, the registry, the console) live in
//! the crates above this one.

mod id;
mod timestamp;

pub use id::EntityId;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stored timestamp did not match the canonical text form.
    #[error("malformed timestamp {text:?}: {source}")]
    MalformedTimestamp {
        text: String,
        source: chrono::ParseError,
    },
}
