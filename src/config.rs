//! Configuration management for wither-extractor
//!
//! Settings are loaded from environment variables with sensible defaults.
//! Command-line flags override whatever is loaded here.
//!
//! # Environment Variables
//!
//! - `WITHER_OUTPUT_DIR`: Directory the JSON documents are written to - default: "output"
//! - `WITHER_PRETTY`: Pretty-print JSON (true|false) - default: "true"
//! - `WITHER_KEY_POLICY`: Duplicate key handling (overwrite|reject) - default: "overwrite"
//! - `WITHER_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use wither_extractor::ExtractorConfig;
//!
//! let config = ExtractorConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::extractors::KeyPolicy;
use crate::util::logging::parse_level;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

/// Default values for configuration
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_PRETTY: bool = true;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Main configuration structure for wither-extractor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractorConfig {
    /// Directory the documents are written to
    pub output_dir: PathBuf,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// What to do when two entries share an output key
    pub key_policy: KeyPolicy,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ExtractorConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable values fall back to their defaults. Use
    /// [`ExtractorConfig::from_env`] to surface them as errors instead.
    fn default() -> Self {
        Self::lenient_from_env()
    }
}

impl ExtractorConfig {
    /// Loads configuration from the environment, rejecting invalid values
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_policy = match env::var("WITHER_KEY_POLICY") {
            Ok(value) => value.parse().map_err(|error| ConfigError::ParseError {
                field: "WITHER_KEY_POLICY".to_string(),
                error,
            })?,
            Err(_) => KeyPolicy::default(),
        };

        let pretty = match env::var("WITHER_PRETTY") {
            Ok(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::ParseError {
                    field: "WITHER_PRETTY".to_string(),
                    error: e.to_string(),
                })?,
            Err(_) => DEFAULT_PRETTY,
        };

        Ok(Self {
            pretty,
            key_policy,
            ..Self::lenient_from_env()
        })
    }

    fn lenient_from_env() -> Self {
        let output_dir = env::var("WITHER_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let pretty = env::var("WITHER_PRETTY")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_PRETTY);

        let key_policy = env::var("WITHER_KEY_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let log_level = env::var("WITHER_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            output_dir,
            pretty,
            key_policy,
            log_level,
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the output directory is empty or the log level
    /// is unknown
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output directory cannot be empty".to_string(),
            ));
        }

        self.tracing_level()?;
        Ok(())
    }

    /// The configured log level as a `tracing` level
    pub fn tracing_level(&self) -> Result<Level, ConfigError> {
        parse_level(&self.log_level).ok_or_else(|| {
            ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            ))
        })
    }
}

impl fmt::Display for ExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extractor Configuration:")?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        writeln!(f, "  Pretty: {}", self.pretty)?;
        writeln!(f, "  Key Policy: {}", self.key_policy)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
