//! wither-extractor - world-generation registry extractor
//!
//! Reads registries from a game server handle and turns each into a JSON
//! document: the list of chunk statuses, the octave noise definitions and the
//! multi-noise biome source parameter lists with their fixed-point climate
//! parameters decoded to floats.
//!
//! # Core Concepts
//!
//! - **Server**: explicit handle exposing the registries ([`Server`]). The CLI
//!   uses a [`SnapshotServer`] loaded from a JSON or YAML dump.
//! - **Extractor**: converts one registry into one document ([`Extractor`]).
//! - **Orchestrator**: runs the selected extractors and writes their documents
//!   only when all of them succeed ([`ExtractionOrchestrator`]).
//!
//! # Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use wither_extractor::{ExtractionOrchestrator, ExtractorRegistry, OutputWriter, SnapshotServer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let server = SnapshotServer::from_path(Path::new("server.json"))?;
//! let orchestrator = ExtractionOrchestrator::new(ExtractorRegistry::default());
//! let written = orchestrator.run(&server, &OutputWriter::new("output", true))?;
//! println!("wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod extractors;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod server;
pub mod util;

pub use codec::CodecError;
pub use config::{ConfigError, ExtractorConfig};
pub use extractors::{ExtractError, Extractor, ExtractorRegistry, KeyPolicy};
pub use output::{ExtractedDocument, OutputWriter};
pub use pipeline::ExtractionOrchestrator;
pub use server::{Identifier, Registry, RegistryEntry, RegistryKey, Server, SnapshotServer};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
