//! Explicit server handle passed into every extractor

use super::registry::Registry;
use super::worldgen::{ChunkStatus, MultiNoiseParameterList, NoiseParameters};

/// Read-only view of a fully initialized server's registries
///
/// Each accessor returns `None` when the registry is not part of the server's
/// current configuration.
pub trait Server {
    fn chunk_statuses(&self) -> Option<&Registry<ChunkStatus>>;

    fn noise_parameters(&self) -> Option<&Registry<NoiseParameters>>;

    fn multi_noise_parameter_lists(&self) -> Option<&Registry<MultiNoiseParameterList>>;
}
