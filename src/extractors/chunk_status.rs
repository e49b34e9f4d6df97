//! Chunk status extractor - flat list of generation stage names

use super::{entry_path, ExtractError, Extractor};
use crate::server::{RegistryKey, Server};
use serde_json::Value;
use tracing::debug;

/// Emits the chunk status registry as an array of path components,
/// in registration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkStatusExtractor;

impl Extractor for ChunkStatusExtractor {
    fn file_name(&self) -> &'static str {
        "chunk_status.json"
    }

    fn extract(&self, server: &dyn Server) -> Result<Value, ExtractError> {
        let registry = server
            .chunk_statuses()
            .ok_or(ExtractError::MissingRegistry(RegistryKey::CHUNK_STATUS))?;

        let statuses = registry
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry_path(entry, registry.key(), index).map(|path| Value::String(path.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = statuses.len(), "Extracted chunk statuses");
        Ok(Value::Array(statuses))
    }
}
