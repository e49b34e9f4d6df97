//! World-generation values held by the server's registries

use super::identifier::Identifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stage of chunk generation. Only its registry name matters here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStatus {}

/// Octave noise definition (`worldgen/noise` registry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseParameters {
    pub first_octave: i32,
    /// One coefficient per octave, starting at `first_octave`
    pub amplitudes: Vec<f64>,
}

impl NoiseParameters {
    pub fn new(first_octave: i32, amplitudes: Vec<f64>) -> Self {
        Self {
            first_octave,
            amplitudes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter range is inverted: min {min} > max {max}")]
pub struct InvertedRangeError {
    pub min: i64,
    pub max: i64,
}

/// Closed interval of quantized parameter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct ParameterRange {
    min: i64,
    max: i64,
}

impl ParameterRange {
    pub fn new(min: i64, max: i64) -> Result<Self, InvertedRangeError> {
        if min > max {
            return Err(InvertedRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range collapsed to a single quantized value
    pub fn point(value: i64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl TryFrom<[i64; 2]> for ParameterRange {
    type Error = InvertedRangeError;

    fn try_from([min, max]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<ParameterRange> for [i64; 2] {
    fn from(range: ParameterRange) -> Self {
        [range.min, range.max]
    }
}

/// Six-dimensional region of climate space plus a quantized offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseHypercube {
    pub temperature: ParameterRange,
    pub humidity: ParameterRange,
    pub continentalness: ParameterRange,
    pub erosion: ParameterRange,
    pub depth: ParameterRange,
    pub weirdness: ParameterRange,
    pub offset: i64,
}

impl NoiseHypercube {
    /// Named dimensions in output order
    pub fn dimensions(&self) -> [(&'static str, ParameterRange); 6] {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("continentalness", self.continentalness),
            ("erosion", self.erosion),
            ("depth", self.depth),
            ("weirdness", self.weirdness),
        ]
    }
}

/// Reference from a parameter list to the biome it selects
///
/// `Direct` stands for an inline value that was never registered, so it has
/// no identifier to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Identifier>", into = "Option<Identifier>")]
pub enum Holder {
    Reference(Identifier),
    Direct,
}

impl Holder {
    pub fn key(&self) -> Option<&Identifier> {
        match self {
            Holder::Reference(id) => Some(id),
            Holder::Direct => None,
        }
    }
}

impl From<Option<Identifier>> for Holder {
    fn from(id: Option<Identifier>) -> Self {
        id.map_or(Holder::Direct, Holder::Reference)
    }
}

impl From<Holder> for Option<Identifier> {
    fn from(holder: Holder) -> Self {
        match holder {
            Holder::Reference(id) => Some(id),
            Holder::Direct => None,
        }
    }
}

/// One cube-to-biome pair inside a parameter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterPoint {
    pub parameters: NoiseHypercube,
    pub biome: Holder,
}

/// Climate-space lookup table of a multi-noise biome source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiNoiseParameterList {
    #[serde(default)]
    pub entries: Vec<ParameterPoint>,
}

impl MultiNoiseParameterList {
    pub fn new(entries: Vec<ParameterPoint>) -> Self {
        Self { entries }
    }
}
