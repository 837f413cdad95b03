//! Tagged document codec
//!
//! Every tradespace object is exchanged as a JSON tree. Two reserved keys carry
//! the identity (`@id`) and the type discriminator (`@type`); every other key is a
//! camelCase field name. Absent values are never written, so an encoded document
//! contains no `null` markers.
//!
//! # Example
//! ```
//! use entity::{Agency, AgencyType, Entity};
//!
//! let agency = Agency {
//!     agency_type: Some(AgencyType::Government),
//!     ..Default::default()
//! };
//! let doc = agency.encode().unwrap();
//! assert_eq!(doc["@type"], "Agency");
//! assert_eq!(doc["agencyType"], "GOVERNMENT");
//! assert!(doc.get("name").is_none());
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// Generic document tree (maps, lists and scalars)
pub type Document = serde_json::Value;

/// Reserved key holding an entity's external identifier
pub const ID_KEY: &str = "@id";

/// Reserved key holding an entity's type discriminator
pub const TYPE_KEY: &str = "@type";

/// Associates a Rust type with its `@type` discriminator.
pub trait EntityType {
    const TYPE: &'static str;
}

/// Shared contract of all domain objects.
///
/// Equality policy: two entities carrying the same non-null `@id` are the same
/// entity regardless of their content. An entity without an identifier is only
/// ever equal to itself (address identity), so structurally identical copies
/// without `@id` compare unequal.
pub trait Entity: EntityType + Serialize + DeserializeOwned {
    /// Stable external identifier, if any
    fn id(&self) -> Option<&str>;

    /// Discriminator written under `@type`
    fn type_name(&self) -> &'static str {
        Self::TYPE
    }

    /// Converts this entity (and everything it owns) into a document tree.
    fn encode(&self) -> Result<Document> {
        Ok(serde_json::to_value(self)?)
    }

    /// Reads a document as this type. Unrecognized fields are ignored.
    fn decode(doc: Document) -> Result<Self> {
        serde_json::from_value(doc).map_err(|source| Error::Malformed {
            entity: Self::TYPE,
            source,
        })
    }

    /// Parses JSON text as this type.
    fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;
        Self::decode(doc)
    }

    /// Serializes this entity to pretty-printed JSON text.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encode()?)?)
    }

    /// Identity-or-reference equality.
    fn same_entity(&self, other: &Self) -> bool {
        match self.id() {
            Some(id) => other.id() == Some(id),
            None => std::ptr::eq(self, other),
        }
    }
}

/// Implements `PartialEq` through [`Entity::same_entity`].
#[macro_export]
macro_rules! identity_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::Entity::same_entity(self, other)
                }
            }
        )+
    };
}

/// Zero-sized `@type` field.
///
/// Always serializes as `E::TYPE`. Deserialization accepts any value (or none),
/// since a statically typed field already knows what it holds.
pub struct TypeTag<E>(PhantomData<fn() -> E>);

impl<E> TypeTag<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for TypeTag<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for TypeTag<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TypeTag<E> {}

impl<E> PartialEq for TypeTag<E> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<E: EntityType> fmt::Debug for TypeTag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", E::TYPE)
    }
}

impl<E: EntityType> Serialize for TypeTag<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(E::TYPE)
    }
}

impl<'de, E> Deserialize<'de> for TypeTag<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self::new())
    }
}

/// Reads the `@type` discriminator of a document, if it has one.
pub fn type_of(doc: &Document) -> Option<&str> {
    doc.get(TYPE_KEY).and_then(Document::as_str)
}

/// A field holding either one value or a list of values, preserving the shape
/// it was written in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value when exactly one is held.
    pub fn as_single(&self) -> Option<&T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) if values.len() == 1 => values.first(),
            OneOrMany::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

/// Deserializes a single element or a list into a `Vec` (missing or null → empty).
pub fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?
        .map(OneOrMany::into_vec)
        .unwrap_or_default())
}

/// Like [`one_or_many`] but keeps the distinction between "absent" and "empty".
pub fn one_or_many_option<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?.map(OneOrMany::into_vec))
}
