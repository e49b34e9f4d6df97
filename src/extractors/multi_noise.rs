//! Multi-noise extractor - climate hypercubes per parameter list and biome
//!
//! Output shape:
//!
//! ```json
//! {
//!   "overworld": {
//!     "minecraft:plains": {
//!       "temperature": [-0.45, -0.15],
//!       "humidity": [-1.0, -0.35],
//!       "continentalness": [-0.11, 0.03],
//!       "erosion": [-1.0, -0.78],
//!       "depth": [0.0, 0.0],
//!       "weirdness": [-1.0, -0.9333],
//!       "offset": 0.0
//!     }
//!   }
//! }
//! ```
//!
//! Outer keys are list path components, inner keys are full biome identifiers.
//! Field order inside a cube is fixed.

use super::{entry_path, insert_keyed, warn_overwritten, ExtractError, Extractor, KeyPolicy};
use crate::codec;
use crate::server::{MultiNoiseParameterList, NoiseHypercube, ParameterRange, RegistryKey, Server};
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct MultiNoiseExtractor {
    key_policy: KeyPolicy,
}

impl MultiNoiseExtractor {
    pub fn new(key_policy: KeyPolicy) -> Self {
        Self { key_policy }
    }

    fn list_to_json(
        &self,
        list_key: &str,
        list: &MultiNoiseParameterList,
    ) -> Result<Value, ExtractError> {
        let mut biomes = Map::new();
        let mut overwritten = 0;

        for (index, point) in list.entries.iter().enumerate() {
            let biome = point
                .biome
                .key()
                .ok_or_else(|| ExtractError::UnresolvedHolder {
                    list: list_key.to_string(),
                    index,
                })?
                .to_string();

            let cube = hypercube_to_json(&biome, &point.parameters)?;
            match insert_keyed(
                &mut biomes,
                biome,
                cube,
                self.key_policy,
                RegistryKey::MULTI_NOISE_PARAMETER_LIST,
            ) {
                Ok(true) => overwritten += 1,
                Ok(false) => {}
                Err(ExtractError::DuplicateKey { registry, key }) => {
                    return Err(ExtractError::DuplicateKey {
                        registry,
                        key: format!("{}/{}", list_key, key),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        warn_overwritten(RegistryKey::MULTI_NOISE_PARAMETER_LIST, list_key, overwritten);
        debug!(
            list = %list_key,
            points = list.entries.len(),
            biomes = biomes.len(),
            "Extracted parameter list"
        );
        Ok(Value::Object(biomes))
    }
}

/// Serializes a hypercube as six `[min, max]` ranges followed by `offset`.
pub fn hypercube_to_json(biome: &str, cube: &NoiseHypercube) -> Result<Value, ExtractError> {
    let mut json = Map::new();
    for (name, range) in cube.dimensions() {
        json.insert(name.to_string(), range_to_json(biome, name, range)?);
    }

    let offset = codec::decode_to_json(cube.offset).map_err(|source| ExtractError::Decode {
        key: biome.to_string(),
        field: "offset",
        source,
    })?;
    json.insert("offset".to_string(), Value::Number(offset));

    Ok(Value::Object(json))
}

fn range_to_json(
    biome: &str,
    field: &'static str,
    range: ParameterRange,
) -> Result<Value, ExtractError> {
    let decode = |value: i64| {
        codec::decode_to_json(value)
            .map(Value::Number)
            .map_err(|source| ExtractError::Decode {
                key: biome.to_string(),
                field,
                source,
            })
    };
    Ok(Value::Array(vec![decode(range.min())?, decode(range.max())?]))
}

impl Extractor for MultiNoiseExtractor {
    fn file_name(&self) -> &'static str {
        "multi_noise.json"
    }

    fn extract(&self, server: &dyn Server) -> Result<Value, ExtractError> {
        let registry = server
            .multi_noise_parameter_lists()
            .ok_or(ExtractError::MissingRegistry(
                RegistryKey::MULTI_NOISE_PARAMETER_LIST,
            ))?;

        let mut lists = Map::new();
        let mut overwritten = 0;
        for (index, entry) in registry.iter().enumerate() {
            let list_key = entry_path(entry, registry.key(), index)?;
            let list_json = self.list_to_json(list_key, &entry.value)?;
            if insert_keyed(
                &mut lists,
                list_key.to_string(),
                list_json,
                self.key_policy,
                registry.key(),
            )? {
                overwritten += 1;
            }
        }
        warn_overwritten(registry.key(), "root", overwritten);

        debug!(count = lists.len(), "Extracted multi-noise parameter lists");
        Ok(Value::Object(lists))
    }
}
