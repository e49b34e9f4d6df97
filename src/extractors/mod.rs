// Registry extractors
//
// Each extractor turns one server registry into a JSON document and names the
// file the document belongs in. Extractors only read from the server handle;
// writing files is left to the pipeline.

pub mod chunk_status;
pub mod multi_noise;
pub mod noise_parameters;
pub mod registry;

pub use chunk_status::ChunkStatusExtractor;
pub use multi_noise::MultiNoiseExtractor;
pub use noise_parameters::NoiseParametersExtractor;
pub use registry::ExtractorRegistry;

use crate::codec::CodecError;
use crate::server::{RegistryEntry, RegistryKey, Server};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Registry {0} is not present on the server")]
    MissingRegistry(RegistryKey),

    #[error("Entry #{index} of registry {registry} has no identifier")]
    UnresolvedIdentifier { registry: RegistryKey, index: usize },

    #[error("Entry #{index} of parameter list '{list}' points to an unregistered biome")]
    UnresolvedHolder { list: String, index: usize },

    #[error("Failed to decode {field} of '{key}': {source}")]
    Decode {
        key: String,
        field: &'static str,
        #[source]
        source: CodecError,
    },

    #[error("Amplitude #{index} of noise '{key}' is not a finite number")]
    NonFiniteAmplitude { key: String, index: usize },

    #[error("Duplicate key '{key}' in registry {registry}")]
    DuplicateKey { registry: RegistryKey, key: String },
}

/// What to do when two entries map to the same output key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Later entries replace earlier ones
    #[default]
    Overwrite,
    /// Fail the extraction
    Reject,
}

impl FromStr for KeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(KeyPolicy::Overwrite),
            "reject" => Ok(KeyPolicy::Reject),
            _ => Err(format!(
                "Invalid key policy: {}. Valid options: overwrite, reject",
                s
            )),
        }
    }
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPolicy::Overwrite => f.write_str("overwrite"),
            KeyPolicy::Reject => f.write_str("reject"),
        }
    }
}

/// A unit that converts one registry into one JSON document
pub trait Extractor: Send + Sync {
    /// Output file name; stable across runs
    fn file_name(&self) -> &'static str;

    /// Builds the full document for this extractor's registry
    fn extract(&self, server: &dyn Server) -> Result<Value, ExtractError>;
}

/// Path component of an entry's identifier, or an error naming the entry
pub(crate) fn entry_path<T>(
    entry: &RegistryEntry<T>,
    registry: RegistryKey,
    index: usize,
) -> Result<&str, ExtractError> {
    entry
        .key
        .as_ref()
        .map(|id| id.path())
        .ok_or(ExtractError::UnresolvedIdentifier { registry, index })
}

/// Inserts `value` under `key`, applying the collision policy
///
/// Returns `true` when an earlier value under the same key was replaced.
pub(crate) fn insert_keyed(
    map: &mut Map<String, Value>,
    key: String,
    value: Value,
    policy: KeyPolicy,
    registry: RegistryKey,
) -> Result<bool, ExtractError> {
    if policy == KeyPolicy::Reject && map.contains_key(&key) {
        return Err(ExtractError::DuplicateKey { registry, key });
    }
    Ok(map.insert(key, value).is_some())
}

/// Logs collisions once per scope instead of once per replaced entry
pub(crate) fn warn_overwritten(registry: RegistryKey, scope: &str, overwritten: usize) {
    if overwritten > 0 {
        warn!(
            registry = %registry,
            scope = %scope,
            overwritten,
            "Duplicate keys, later entries replaced earlier ones"
        );
    }
}
