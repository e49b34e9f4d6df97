//! Structured logging setup for wither-extractor
//!
//! Logs go to stderr through `tracing`, so stdout stays free for command
//! output. The subscriber can only be installed once per process.
//!
//! # Example
//!
//! ```no_run
//! use wither_extractor::util::logging::{self, LoggingConfig};
//! use wither_extractor::ExtractorConfig;
//!
//! let config = LoggingConfig::from_config(&ExtractorConfig::default()).expect("Invalid log level");
//! logging::init_logging(config);
//!
//! use tracing::{debug, info};
//! info!("Extraction started");
//! debug!(file = "multi_noise.json", "Running extractor");
//! ```

use crate::config::{ConfigError, ExtractorConfig};
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Target the crate's own events are filed under
const CRATE_TARGET: &str = "wither_extractor";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events
    pub level: Level,

    /// Emit one JSON object per event instead of human-readable lines
    pub use_json: bool,

    /// Include the module target (e.g., wither_extractor::pipeline) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Takes the level from `config.log_level`, JSON output from `WITHER_LOG_JSON`
    ///
    /// An unknown level is the same error `ExtractorConfig::validate` reports.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        let level = config.tracing_level()?;

        let use_json = env::var("WITHER_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Ok(Self {
            level,
            use_json,
            ..Default::default()
        })
    }

    /// Filter directive applied when `RUST_LOG` is not set
    pub fn directive(&self) -> String {
        format!("{}={}", CRATE_TARGET, self.level)
    }
}

/// Parses a log level name, case-insensitively
///
/// ```
/// use wither_extractor::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
/// assert_eq!(parse_level("loud"), None);
/// ```
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Later calls are ignored.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directive())
        };

        let registry = tracing_subscriber::registry().with(filter);

        if config.use_json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
