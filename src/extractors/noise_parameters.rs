//! Noise parameters extractor - one record per `worldgen/noise` entry

use super::{entry_path, insert_keyed, warn_overwritten, ExtractError, Extractor, KeyPolicy};
use crate::server::{NoiseParameters, RegistryKey, Server};
use serde_json::{Map, Number, Value};
use tracing::debug;

/// Emits `{ "<path>": { "first_octave": i32, "amplitudes": [f64, ...] } }`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoiseParametersExtractor {
    key_policy: KeyPolicy,
}

impl NoiseParametersExtractor {
    pub fn new(key_policy: KeyPolicy) -> Self {
        Self { key_policy }
    }

    fn record(key: &str, noise: &NoiseParameters) -> Result<Value, ExtractError> {
        let amplitudes = noise
            .amplitudes
            .iter()
            .enumerate()
            .map(|(index, amplitude)| {
                Number::from_f64(*amplitude)
                    .map(Value::Number)
                    .ok_or_else(|| ExtractError::NonFiniteAmplitude {
                        key: key.to_string(),
                        index,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut record = Map::new();
        record.insert("first_octave".to_string(), Value::from(noise.first_octave));
        record.insert("amplitudes".to_string(), Value::Array(amplitudes));
        Ok(Value::Object(record))
    }
}

impl Extractor for NoiseParametersExtractor {
    fn file_name(&self) -> &'static str {
        "noise_parameters.json"
    }

    fn extract(&self, server: &dyn Server) -> Result<Value, ExtractError> {
        let registry = server
            .noise_parameters()
            .ok_or(ExtractError::MissingRegistry(RegistryKey::NOISE_PARAMETERS))?;

        let mut noises = Map::new();
        let mut overwritten = 0;
        for (index, entry) in registry.iter().enumerate() {
            let key = entry_path(entry, registry.key(), index)?;
            let record = Self::record(key, &entry.value)?;
            if insert_keyed(
                &mut noises,
                key.to_string(),
                record,
                self.key_policy,
                registry.key(),
            )? {
                overwritten += 1;
            }
        }
        warn_overwritten(registry.key(), "root", overwritten);

        debug!(count = noises.len(), "Extracted noise parameters");
        Ok(Value::Object(noises))
    }
}
