//! Design-space enumeration for Earth-observing missions
//!
//! A [`TradespaceSearch`] names candidate constellations, satellites and
//! ground networks. [`DesignSpace::generate_architectures`] expands those
//! into concrete [`Architecture`]s, streaming the constellation axis.

pub mod architecture;
pub mod design_space;
pub mod mission;
pub mod registry;
pub mod search;

// Re-export main types at crate root
pub use architecture::{Architecture, Architectures};
pub use design_space::DesignSpace;
pub use mission::{MissionConcept, MissionObjective, ObjectiveType};
pub use registry::{AnyEntity, Decoded, decode, from_json, registered_types};
pub use search::{
    AnalysisOutputs, AnalysisSettings, ObsTimeStep, SearchParameters, SearchStrategy,
    TradespaceSearch,
};

#[cfg(test)]
mod design_space_test;
#[cfg(test)]
mod mission_test;
#[cfg(test)]
mod registry_test;
