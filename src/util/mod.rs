//! Utility modules for wither-extractor

pub mod logging;

pub use logging::{init_logging, parse_level, LoggingConfig};
