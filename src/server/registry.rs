//! Ordered, read-only registries as exposed by the server

use super::identifier::Identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a registry, e.g. `minecraft:worldgen/noise`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryKey(&'static str);

impl RegistryKey {
    pub const CHUNK_STATUS: Self = Self("minecraft:chunk_status");
    pub const NOISE_PARAMETERS: Self = Self("minecraft:worldgen/noise");
    pub const MULTI_NOISE_PARAMETER_LIST: Self =
        Self("minecraft:worldgen/multi_noise_biome_source_parameter_list");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A single value held by a registry
///
/// `key` is `None` for values that were never registered under a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry<T> {
    #[serde(default)]
    pub key: Option<Identifier>,
    #[serde(flatten)]
    pub value: T,
}

impl<T> RegistryEntry<T> {
    pub fn new(key: Identifier, value: T) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }

    pub fn unkeyed(value: T) -> Self {
        Self { key: None, value }
    }
}

/// Enumerable collection of entries in registration order
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    key: RegistryKey,
    entries: Vec<RegistryEntry<T>>,
}

impl<T> Registry<T> {
    pub fn new(key: RegistryKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    pub fn from_entries(key: RegistryKey, entries: Vec<RegistryEntry<T>>) -> Self {
        Self { key, entries }
    }

    pub fn key(&self) -> RegistryKey {
        self.key
    }

    /// Appends a named value after all existing entries
    pub fn register(&mut self, id: Identifier, value: T) -> &mut Self {
        self.entries.push(RegistryEntry::new(id, value));
        self
    }

    pub fn push(&mut self, entry: RegistryEntry<T>) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
