// Host-side model: identifiers, registries and the values they hold.
//
// Extractors never reach into global state. Everything they read comes through
// a `Server` handle, so tests can hand them registries built in memory.

pub mod handle;
pub mod identifier;
pub mod registry;
pub mod snapshot;
pub mod worldgen;

pub use handle::Server;
pub use identifier::{Identifier, IdentifierError};
pub use registry::{Registry, RegistryEntry, RegistryKey};
pub use snapshot::{SnapshotError, SnapshotServer};
pub use worldgen::{
    ChunkStatus, Holder, InvertedRangeError, MultiNoiseParameterList, NoiseHypercube,
    NoiseParameters, ParameterPoint, ParameterRange,
};
