//! Typed attribute payloads, one struct per entity variant.
//!
//! Every declared attribute is a string and defaults to empty, matching
//! the backing file where all attribute values are serialized as JSON
//! strings. Attributes outside these declared sets are carried by the
//! entity's residual map, not here.

use crate::kind::ModelKind;

macro_rules! field_accessors {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $ty {
            /// Declared fields as (name, value) pairs, in declaration order.
            #[must_use]
            pub fn fields(&self) -> Vec<(&'static str, &str)> {
                vec![$((stringify!($field), self.$field.as_str())),+]
            }

            pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut String> {
                $(
                    if name == stringify!($field) {
                        return Some(&mut self.$field);
                    }
                )+
                None
            }
        }
    };
}

/// Account holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

field_accessors!(User { email, password, first_name, last_name });

/// Geographic state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub name: String,
}

field_accessors!(State { name });

/// City within a state; `state_id` refers to a [`State`] entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct City {
    pub state_id: String,
    pub name: String,
}

field_accessors!(City { state_id, name });

/// Bookable amenity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amenity {
    pub name: String,
}

field_accessors!(Amenity { name });

/// Rentable place. Numeric-looking fields (`number_rooms`, `latitude`, …)
/// are still strings; the storage layer does not interpret attribute
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    pub city_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub number_rooms: String,
    pub number_bathrooms: String,
    pub max_guest: String,
    pub price_by_night: String,
    pub latitude: String,
    pub longitude: String,
    pub amenity_ids: String,
}

field_accessors!(Place {
    city_id,
    user_id,
    name,
    description,
    number_rooms,
    number_bathrooms,
    max_guest,
    price_by_night,
    latitude,
    longitude,
    amenity_ids,
});

/// Review of a place by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    pub place_id: String,
    pub user_id: String,
    pub text: String,
}

field_accessors!(Review { place_id, user_id, text });

/// The per-variant attribute payload of an entity.
///
/// `Base` carries no declared attributes; everything set on a base
/// entity goes to the residual map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Base,
    User(User),
    State(State),
    City(City),
    Amenity(Amenity),
    Place(Place),
    Review(Review),
}

impl Variant {
    /// An empty payload for the given kind, every declared field `""`.
    #[must_use]
    pub fn empty(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Base => Variant::Base,
            ModelKind::User => Variant::User(User::default()),
            ModelKind::State => Variant::State(State::default()),
            ModelKind::City => Variant::City(City::default()),
            ModelKind::Amenity => Variant::Amenity(Amenity::default()),
            ModelKind::Place => Variant::Place(Place::default()),
            ModelKind::Review => Variant::Review(Review::default()),
        }
    }

    /// The kind this payload belongs to.
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        match self {
            Variant::Base => ModelKind::Base,
            Variant::User(_) => ModelKind::User,
            Variant::State(_) => ModelKind::State,
            Variant::City(_) => ModelKind::City,
            Variant::Amenity(_) => ModelKind::Amenity,
            Variant::Place(_) => ModelKind::Place,
            Variant::Review(_) => ModelKind::Review,
        }
    }

    /// Declared fields as (name, value) pairs, in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Variant::Base => Vec::new(),
            Variant::User(v) => v.fields(),
            Variant::State(v) => v.fields(),
            Variant::City(v) => v.fields(),
            Variant::Amenity(v) => v.fields(),
            Variant::Place(v) => v.fields(),
            Variant::Review(v) => v.fields(),
        }
    }

    /// Reads a declared field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match self {
            Variant::Base => None,
            Variant::User(v) => v.field_mut(name),
            Variant::State(v) => v.field_mut(name),
            Variant::City(v) => v.field_mut(name),
            Variant::Amenity(v) => v.field_mut(name),
            Variant::Place(v) => v.field_mut(name),
            Variant::Review(v) => v.field_mut(name),
        }
    }
}
