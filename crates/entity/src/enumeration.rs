//! Case-insensitive enumerated vocabularies.
//!
//! Enumerated values are written upper-case and matched case-insensitively.
//! Parsing is explicit ([`Enumeration::parse`] returns [`Unmatched`]); the
//! field-level deserializers in [`lenient`] turn an unmatched value into an
//! absent one and log a warning instead of failing the whole document.

use thiserror::Error;

/// A string that matched no member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a recognized {enumeration}")]
pub struct Unmatched {
    pub enumeration: &'static str,
    pub value: String,
}

/// A closed vocabulary of upper-case string values.
pub trait Enumeration: Copy + Sized + 'static {
    /// Human-readable name used in diagnostics
    const NAME: &'static str;

    /// All members in declaration order
    const MEMBERS: &'static [Self];

    /// Canonical (upper-case) spelling
    fn as_str(&self) -> &'static str;

    /// Case-insensitive lookup.
    fn parse(value: &str) -> Result<Self, Unmatched> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Unmatched {
                enumeration: Self::NAME,
                value: value.to_string(),
            })
    }

    /// Element-wise [`Enumeration::parse`].
    fn parse_list<S: AsRef<str>>(values: &[S]) -> Vec<Result<Self, Unmatched>> {
        values.iter().map(|value| Self::parse(value.as_ref())).collect()
    }
}

/// Declares an upper-case string enumeration with case-insensitive serde support.
///
/// ```
/// entity::enumeration! {
///     /// Pointing modes
///     pub enum Pointing as "pointing mode" {
///         Nadir => "NADIR",
///         Limb => "LIMB",
///     }
/// }
///
/// use entity::Enumeration;
/// assert_eq!(Pointing::parse("nadir"), Ok(Pointing::Nadir));
/// assert_eq!(Pointing::Limb.to_string(), "LIMB");
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::Enumeration for $name {
            const NAME: &'static str = $label;
            const MEMBERS: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Enumeration::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Unmatched;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::Enumeration>::parse(value)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str($crate::Enumeration::as_str(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::Enumeration>::parse(&value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}

/// Field deserializers that degrade unmatched values instead of failing.
///
/// Any value that is not a recognized member, strings and non-strings alike,
/// reads as absent.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    use super::Enumeration;

    fn member<E: Enumeration>(value: &Value) -> Option<E> {
        match value {
            Value::String(text) => E::parse(text)
                .map_err(|unmatched| warn!("{unmatched}; ignoring it"))
                .ok(),
            Value::Null => None,
            other => {
                warn!("`{other}` is not a recognized {}; ignoring it", E::NAME);
                None
            }
        }
    }

    /// A single enumerated field; an unmatched value becomes `None`.
    pub fn option<'de, D, E>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        D: Deserializer<'de>,
        E: Enumeration,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(member::<E>(&value))
    }

    /// An enumerated list field (one value or many); unmatched entries are dropped.
    pub fn list<'de, D, E>(deserializer: D) -> Result<Vec<E>, D::Error>
    where
        D: Deserializer<'de>,
        E: Enumeration,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(values) => values.iter().filter_map(member::<E>).collect(),
            value => member::<E>(&value).into_iter().collect(),
        })
    }
}
