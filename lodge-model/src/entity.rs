//! The base entity contract.
//!
//! Every stored object is an [`Entity`]: a unique id, creation and
//! update timestamps, one variant's typed attributes, and a residual map
//! for attributes outside the declared schema. Entities convert to and
//! from the backing file's record form, a flat JSON object carrying every
//! attribute plus a `"__class__"` type tag.

use crate::error::{ModelError, ModelResult};
use crate::kind::ModelKind;
use crate::variant::Variant;
use lodge_types::{EntityId, Timestamp};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Wire name of the embedded type tag in serialized records.
pub const CLASS_KEY: &str = "__class__";

/// Attribute names managed by the entity itself. `set_attr` ignores them.
const RESERVED: [&str; 3] = ["id", "created_at", "updated_at"];

/// A persisted domain object.
///
/// Identity and timestamps are private: the id never changes after
/// construction, `created_at` is fixed for the entity's lifetime, and
/// `updated_at` only moves forward through [`Entity::touch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    created_at: Timestamp,
    updated_at: Timestamp,
    variant: Variant,
    extra: BTreeMap<String, String>,
}

impl Entity {
    /// Creates a fresh entity of the given kind: a new random id, both
    /// timestamps set to the same instant, all attributes empty.
    #[must_use]
    pub fn new(kind: ModelKind) -> Self {
        let now = Timestamp::now();
        Self {
            id: EntityId::new(),
            created_at: now,
            updated_at: now,
            variant: Variant::empty(kind),
            extra: BTreeMap::new(),
        }
    }

    /// Reconstructs an entity of a known kind from its record form.
    ///
    /// `id`, `created_at` and `updated_at` are required; the id is
    /// adopted verbatim and the timestamps are parsed from canonical
    /// text. Every other key except [`CLASS_KEY`] becomes an attribute:
    /// a declared variant field when the name matches, a residual entry
    /// otherwise. Attribute values must be JSON strings.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidRecord`] for a missing or non-string required
    /// field or a non-string attribute value, [`ModelError::Timestamp`]
    /// for a timestamp that does not parse.
    pub fn from_record(kind: ModelKind, record: &Map<String, Value>) -> ModelResult<Self> {
        let id = EntityId::from(require_str(record, "id")?);
        let created_at = Timestamp::parse(require_str(record, "created_at")?)?;
        let updated_at = Timestamp::parse(require_str(record, "updated_at")?)?;

        let mut variant = Variant::empty(kind);
        let mut extra = BTreeMap::new();
        for (key, value) in record {
            if key == CLASS_KEY || RESERVED.contains(&key.as_str()) {
                continue;
            }
            let Value::String(text) = value else {
                return Err(ModelError::InvalidRecord(format!(
                    "attribute {key:?} is not a string"
                )));
            };
            match variant.field_mut(key) {
                Some(slot) => slot.clone_from(text),
                None => {
                    extra.insert(key.clone(), text.clone());
                }
            }
        }

        Ok(Self {
            id,
            created_at,
            updated_at,
            variant,
            extra,
        })
    }

    /// Reconstructs an entity from a record carrying its own type tag.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownClass`] if the tag names no known variant,
    /// plus everything [`Entity::from_record`] can return.
    pub fn from_tagged_record(record: &Map<String, Value>) -> ModelResult<Self> {
        let tag = require_str(record, CLASS_KEY)?;
        let kind = ModelKind::from_tag(tag)?;
        Self::from_record(kind, record)
    }

    /// Serializes to the record form: every attribute as a JSON string,
    /// timestamps in canonical text, plus the [`CLASS_KEY`] tag.
    ///
    /// Exact inverse of [`Entity::from_record`] for the same kind.
    #[must_use]
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("id".into(), Value::String(self.id.to_string()));
        record.insert(
            "created_at".into(),
            Value::String(self.created_at.to_string()),
        );
        record.insert(
            "updated_at".into(),
            Value::String(self.updated_at.to_string()),
        );
        for (name, value) in self.variant.fields() {
            record.insert(name.into(), Value::String(value.into()));
        }
        for (name, value) in &self.extra {
            record.insert(name.clone(), Value::String(value.clone()));
        }
        record.insert(CLASS_KEY.into(), Value::String(self.kind().tag().into()));
        record
    }

    /// The entity's id.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The variant this entity belongs to.
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        self.variant.kind()
    }

    /// Creation time, fixed at construction.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last update time.
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The typed attribute payload.
    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// The composite registry key, `"<tag>.<id>"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}.{}", self.kind().tag(), self.id)
    }

    /// Marks the entity as updated now.
    ///
    /// `updated_at` strictly increases on every call: if the clock has
    /// not advanced a full microsecond since the last touch, the previous
    /// value is ticked forward instead.
    pub fn touch(&mut self) {
        let now = Timestamp::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at.tick()
        };
    }

    /// Sets one string attribute: the declared variant field when the
    /// name matches, a residual entry otherwise.
    ///
    /// The reserved names (`id`, `created_at`, `updated_at`) and the type
    /// tag are managed by the entity and silently ignored here.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        if RESERVED.contains(&name) || name == CLASS_KEY {
            return;
        }
        let value = value.into();
        match self.variant.field_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }

    /// Reads one attribute by name, declared field or residual entry.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.variant
            .get(name)
            .or_else(|| self.extra.get(name).map(String::as_str))
    }
}

impl fmt::Display for Entity {
    /// `[<tag>] (<id>) <attributes>` with the attributes rendered as a
    /// JSON object, keys sorted, type tag excluded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attrs = self.to_record();
        attrs.remove(CLASS_KEY);
        let rendered = serde_json::to_string(&attrs).map_err(|_| fmt::Error)?;
        write!(f, "[{}] ({}) {}", self.kind().tag(), self.id, rendered)
    }
}

fn require_str<'a>(record: &'a Map<String, Value>, key: &str) -> ModelResult<&'a str> {
    record
        .get(key)
        .ok_or_else(|| ModelError::InvalidRecord(format!("missing {key:?}")))?
        .as_str()
        .ok_or_else(|| ModelError::InvalidRecord(format!("{key:?} is not a string")))
}
