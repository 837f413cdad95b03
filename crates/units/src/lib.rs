//! Physical quantities for orbit and ground-segment descriptions
//!
//! Thin `f64` newtypes that serialize transparently as bare numbers, so they can
//! sit directly inside tradespace documents.

pub mod angle;
pub mod length;
pub mod time;

#[cfg(test)]
mod length_test;

pub use angle::Angle;
pub use length::Length;
pub use time::Time;
