//! Extractor registry
//!
//! Holds the fixed set of extractors in the order they run.

use super::{
    ChunkStatusExtractor, Extractor, KeyPolicy, MultiNoiseExtractor, NoiseParametersExtractor,
};
use std::sync::Arc;

pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with every known extractor
    pub fn with_defaults(key_policy: KeyPolicy) -> Self {
        let extractors: Vec<Arc<dyn Extractor>> = vec![
            Arc::new(ChunkStatusExtractor),
            Arc::new(NoiseParametersExtractor::new(key_policy)),
            Arc::new(MultiNoiseExtractor::new(key_policy)),
        ];

        Self { extractors }
    }

    /// Get an extractor by its output file name
    pub fn get(&self, file_name: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors
            .iter()
            .find(|e| e.file_name() == file_name)
            .cloned()
    }

    /// Output file names in run order
    pub fn file_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.file_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults(KeyPolicy::default())
    }
}
