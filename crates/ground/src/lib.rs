//! Ground segment
//!
//! Target regions, ground stations and the ground networks assembled from
//! them.

pub mod network;
pub mod region;
pub mod station;

// Re-export main types at crate root
pub use network::GroundNetwork;
pub use region::Region;
pub use station::GroundStation;
