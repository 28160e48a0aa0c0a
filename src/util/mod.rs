//! Utility modules for pysift
//!
//! Currently hosts the structured logging setup; the extraction logic
//! itself lives in the scanner, manifests, packages and versions modules.

pub mod logging;

// Re-export commonly used items
pub use logging::{init_default, init_from_env, init_logging, LoggingConfig};
