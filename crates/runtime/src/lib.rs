//! Side-effecting adapters around the pure combat model.
//!
//! - [`repository`] persists player profiles and caches them in front of the
//!   store
//! - [`TracingCombatLog`] routes combat narrative into `tracing`
//! - [`StdRandom`] supplies entropy-seeded randomness
pub mod repository;

mod combat_log;
mod random;

pub use combat_log::TracingCombatLog;
pub use random::StdRandom;
pub use repository::{
    CachedProfileRepository, FileProfileStore, FileTableStorage, InMemoryProfileStore,
    MemoryTableStorage, PlayerProfile, ProfileRepository, ProfileStore, ProfileTable,
    RepositoryError, TableFormat, TableStorage,
};
