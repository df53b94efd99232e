//! The fixed registry of entity variants.
//!
//! Class lookup happens in exactly two places: reload (resolving the
//! `"__class__"` tag of each stored record) and the console (resolving
//! the class argument of a command). Both go through [`ModelKind::from_tag`],
//! so an unrecognized name fails the same way everywhere.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// The concrete entity variants known to the storage engine.
///
/// The tag strings double as the class segment of composite keys and as
/// the `"__class__"` field of serialized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Base,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl ModelKind {
    /// Every known variant, in declaration order.
    pub const ALL: [ModelKind; 7] = [
        ModelKind::Base,
        ModelKind::User,
        ModelKind::State,
        ModelKind::City,
        ModelKind::Amenity,
        ModelKind::Place,
        ModelKind::Review,
    ];

    /// The class tag used in composite keys and serialized records.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            ModelKind::Base => "BaseModel",
            ModelKind::User => "User",
            ModelKind::State => "State",
            ModelKind::City => "City",
            ModelKind::Amenity => "Amenity",
            ModelKind::Place => "Place",
            ModelKind::Review => "Review",
        }
    }

    /// Resolves a class tag to its variant.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownClass`] if the tag names no known
    /// variant. Matching is exact; tags are case sensitive.
    pub fn from_tag(tag: &str) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ModelError::UnknownClass(tag.to_string()))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}
