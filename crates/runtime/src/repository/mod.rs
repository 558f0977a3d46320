//! Repository layer for player progress
//!
//! Profiles are the only data that outlives a run. The layering is:
//! - [`TableStorage`]: loads and saves the complete profile table
//!   ([`FileTableStorage`], [`MemoryTableStorage`])
//! - [`ProfileStore`]: the repository contract on top of a table storage
//! - [`CachedProfileRepository`]: write-through cache in front of any
//!   [`ProfileRepository`]

mod cache;
mod error;
mod file;
mod memory;
mod store;
mod traits;
mod types;

pub use cache::CachedProfileRepository;
pub use error::{RepositoryError, Result};
pub use file::FileTableStorage;
pub use memory::MemoryTableStorage;
pub use store::{FileProfileStore, InMemoryProfileStore, ProfileStore};
pub use traits::{ProfileRepository, TableStorage};
pub use types::{PlayerProfile, ProfileTable, TableFormat};
