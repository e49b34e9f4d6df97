//! Command handlers
//!
//! Each handler returns the process exit code: 0 on success, 1 on failure.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{ConfigArgs, ExtractArgs, ListArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::config::ExtractorConfig;
use crate::extractors::{ExtractorRegistry, KeyPolicy};
use crate::output::OutputWriter;
use crate::pipeline::ExtractionOrchestrator;
use crate::progress::LoggingHandler;
use crate::server::SnapshotServer;

pub fn handle_extract(args: &ExtractArgs, quiet: bool) -> i32 {
    match run_extract(args) {
        Ok(paths) => {
            if !quiet {
                match OutputFormatter::new(OutputFormat::Human).format_written(&paths) {
                    Ok(summary) => print!("{}", summary),
                    Err(e) => error!("Failed to format summary: {:#}", e),
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

/// Applies command-line overrides on top of the environment configuration
pub fn effective_config(args: &ExtractArgs) -> Result<ExtractorConfig> {
    let mut config = ExtractorConfig::from_env().context("Invalid environment configuration")?;

    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if args.compact {
        config.pretty = false;
    }
    if args.strict_keys {
        config.key_policy = KeyPolicy::Reject;
    }

    config.validate()?;
    Ok(config)
}

fn run_extract(args: &ExtractArgs) -> Result<Vec<PathBuf>> {
    let config = effective_config(args)?;
    debug!("Effective configuration: {:?}", config);

    let server = SnapshotServer::from_path(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;
    info!(snapshot = %args.snapshot.display(), "Loaded server snapshot");

    let orchestrator = ExtractionOrchestrator::new(ExtractorRegistry::with_defaults(
        config.key_policy,
    ))
    .with_progress(Arc::new(LoggingHandler))
    .select(&args.only)?;

    let writer = OutputWriter::new(config.output_dir, config.pretty);
    orchestrator.run(&server, &writer)
}

pub fn handle_list(args: &ListArgs) -> i32 {
    let registry = ExtractorRegistry::default();
    let formatter = OutputFormatter::new(args.format.into());

    match formatter.format_file_names(&registry.file_names()) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

pub fn handle_config(args: &ConfigArgs) -> i32 {
    let result = ExtractorConfig::from_env()
        .context("Invalid environment configuration")
        .and_then(|config| {
            config.validate()?;
            OutputFormatter::new(args.format.into()).format_config(&config)
        });

    match result {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
