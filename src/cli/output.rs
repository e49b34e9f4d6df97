//! Output formatting for the informational commands
//!
//! Extracted documents are written by [`crate::output::OutputWriter`]; this
//! module only renders what the CLI prints to stdout.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::ExtractorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the extractor file names; human output is one name per line
    pub fn format_file_names(&self, names: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(names)
                .context("Failed to serialize file names to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(names).context("Failed to serialize file names to YAML")
            }
            OutputFormat::Human => Ok(names.iter().map(|name| format!("{}\n", name)).collect()),
        }
    }

    pub fn format_config(&self, config: &ExtractorConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(config)
                .context("Failed to serialize config to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(config).context("Failed to serialize config to YAML")
            }
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    /// Summary printed after a successful extraction
    pub fn format_written(&self, paths: &[PathBuf]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(paths)
                .context("Failed to serialize written paths to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(paths).context("Failed to serialize written paths to YAML")
            }
            OutputFormat::Human => {
                let mut output = format!("Wrote {} document(s)\n", paths.len());
                for path in paths {
                    output.push_str(&format!("  \u{2713} {}\n", path.display()));
                }
                Ok(output)
            }
        }
    }
}
