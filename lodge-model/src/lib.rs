//! Entity model for the lodge persistence engine.
//!
//! Defines the base contract every stored object follows:
//! - [`Entity`]: identity, creation/update timestamps, typed attributes,
//!   record (de)serialization, and the display form
//! - [`ModelKind`]: the fixed registry of known variants and their tags
//! - [`Variant`] and the per-variant attribute structs ([`User`],
//!   [`Place`], …)
//!
//! The storage engine consumes these types; it never looks inside an
//! entity except through `to_record`/`from_record`.

mod entity;
mod error;
mod kind;
mod variant;

pub use entity::{CLASS_KEY, Entity};
pub use error::{ModelError, ModelResult};
pub use kind::ModelKind;
pub use variant::{Amenity, City, Place, Review, State, User, Variant};
