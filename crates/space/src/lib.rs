//! Space segment of a tradespace
//!
//! Orbits, satellites and their payload instruments, launch vehicles and
//! constellations, together with the generators that expand a ranged
//! constellation description into concrete constellations.

pub mod constants;
pub mod constellation;
pub mod instrument;
pub mod launch;
pub mod orbit;
pub mod satellite;

// Re-export main types at crate root
pub use constellation::{Constellation, ConstellationType};
pub use instrument::{
    BasicInstrument, FieldOfView, Instrument, InstrumentProperties, MountType, OpticalScanner,
    ScanTechnique, SyntheticApertureRadar, instrument_kinds,
};
pub use launch::LaunchVehicle;
pub use orbit::{
    Inclination, Orbit, OrbitType, orbital_period, semimajor_axis, sun_synchronous_inclination,
};
pub use satellite::{PropellantType, Satellite, StabilizationType};

#[cfg(test)]
mod launch_test;
#[cfg(test)]
mod orbit_test;
