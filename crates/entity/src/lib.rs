//! Entity model shared by every tradespace crate
//!
//! Provides the tagged document codec, the error type, case-insensitive
//! enumerations, enumerable value domains (ranges) and the small set of
//! entities used across the space and ground segments (agency, communication
//! band, ISO 8601 durations).

pub mod agency;
pub mod band;
pub mod combinatorics;
pub mod document;
pub mod duration;
pub mod enumeration;
pub mod error;
pub mod range;

// Re-export main types at crate root
pub use agency::{Agency, AgencyType};
pub use band::CommunicationBand;
pub use combinatorics::{Combinations, CombinationsWithReplacement};
pub use document::{
    Document, Entity, EntityType, ID_KEY, OneOrMany, TYPE_KEY, TypeTag, one_or_many,
    one_or_many_option, type_of,
};
pub use duration::IsoDuration;
pub use enumeration::{Enumeration, Unmatched, lenient};
pub use error::{Error, Result};
pub use range::{
    QuantitativeRange, QuantitativeValue, Quantity, RangeValue, RangeValues, Rangeable, Values,
    axis,
};

#[doc(hidden)]
pub use serde;

#[cfg(test)]
mod duration_test;
#[cfg(test)]
mod enumeration_test;
#[cfg(test)]
mod range_test;
