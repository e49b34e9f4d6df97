//! Server handle backed by a registry dump
//!
//! A snapshot file holds the registries of a running server in their
//! internal form (quantized ranges, unregistered holders as `null`). Every
//! section is optional; a missing section is an absent registry, an empty list
//! is an empty one.
//!
//! ```json
//! {
//!   "chunk_status": [{ "key": "minecraft:empty" }, { "key": "minecraft:full" }],
//!   "noise_parameters": [
//!     { "key": "minecraft:temperature", "first_octave": -10, "amplitudes": [1.5, 0.0, 1.0] }
//!   ],
//!   "multi_noise_parameter_lists": [
//!     { "key": "minecraft:nether", "entries": [
//!       { "biome": "minecraft:nether_wastes", "parameters": {
//!         "temperature": [0, 0], "humidity": [0, 0], "continentalness": [0, 0],
//!         "erosion": [0, 0], "depth": [0, 0], "weirdness": [0, 0], "offset": 0 } }
//!     ] }
//!   ]
//! }
//! ```

use super::handle::Server;
use super::registry::{Registry, RegistryEntry, RegistryKey};
use super::worldgen::{ChunkStatus, MultiNoiseParameterList, NoiseParameters};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Default, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    chunk_status: Option<Vec<RegistryEntry<ChunkStatus>>>,
    #[serde(default)]
    noise_parameters: Option<Vec<RegistryEntry<NoiseParameters>>>,
    #[serde(default)]
    multi_noise_parameter_lists: Option<Vec<RegistryEntry<MultiNoiseParameterList>>>,
}

/// In-memory server state, loaded from a dump or assembled by hand
#[derive(Debug, Clone, Default)]
pub struct SnapshotServer {
    chunk_statuses: Option<Registry<ChunkStatus>>,
    noise_parameters: Option<Registry<NoiseParameters>>,
    multi_noise_parameter_lists: Option<Registry<MultiNoiseParameterList>>,
}

impl SnapshotServer {
    /// Server with no registries at all
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_statuses(mut self, registry: Registry<ChunkStatus>) -> Self {
        self.chunk_statuses = Some(registry);
        self
    }

    pub fn with_noise_parameters(mut self, registry: Registry<NoiseParameters>) -> Self {
        self.noise_parameters = Some(registry);
        self
    }

    pub fn with_multi_noise_parameter_lists(
        mut self,
        registry: Registry<MultiNoiseParameterList>,
    ) -> Self {
        self.multi_noise_parameter_lists = Some(registry);
        self
    }

    /// Loads a dump, picking YAML for `.yaml`/`.yml` files and JSON otherwise
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "yaml" | "yml"))
            .unwrap_or(false);

        debug!(path = %path.display(), yaml = is_yaml, "Loading server snapshot");

        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_yaml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: SnapshotFile) -> Self {
        Self {
            chunk_statuses: file
                .chunk_status
                .map(|entries| Registry::from_entries(RegistryKey::CHUNK_STATUS, entries)),
            noise_parameters: file
                .noise_parameters
                .map(|entries| Registry::from_entries(RegistryKey::NOISE_PARAMETERS, entries)),
            multi_noise_parameter_lists: file.multi_noise_parameter_lists.map(|entries| {
                Registry::from_entries(RegistryKey::MULTI_NOISE_PARAMETER_LIST, entries)
            }),
        }
    }
}

impl Server for SnapshotServer {
    fn chunk_statuses(&self) -> Option<&Registry<ChunkStatus>> {
        self.chunk_statuses.as_ref()
    }

    fn noise_parameters(&self) -> Option<&Registry<NoiseParameters>> {
        self.noise_parameters.as_ref()
    }

    fn multi_noise_parameter_lists(&self) -> Option<&Registry<MultiNoiseParameterList>> {
        self.multi_noise_parameter_lists.as_ref()
    }
}
