//! Tradespace search executive
//!
//! Reads a tradespace search document and writes one architecture document
//! per generated architecture.

pub mod executive;
pub mod logging;

pub use executive::{architecture_path, execute};
pub use logging::init_logging;
