//! Repository contracts for player progress.

use super::Result;
use super::types::{PlayerProfile, ProfileTable};

/// Read and update player profiles.
///
/// A missing profile is never an error: both operations create a profile
/// with score 0 on first contact with an unknown name.
pub trait ProfileRepository: Send + Sync {
    /// Returns the profile for `name`, creating it with score 0 if absent.
    fn get_profile(&self, name: &str) -> Result<PlayerProfile>;

    /// Overwrites the score of `name`, creating the profile first if absent.
    ///
    /// The new score is stored as given, even when it is lower than the
    /// current one. Callers decide whether a score is a new high.
    fn update_high_score(&self, name: &str, score: u32) -> Result<()>;
}

/// Whole-table persistence of the profile map.
///
/// Every mutating repository call loads the complete table, changes it, and
/// saves the complete table back. Swapping the storage changes the physical
/// format without touching the repository contract.
pub trait TableStorage: Send + Sync {
    /// Loads the persisted table.
    ///
    /// Never fails: a missing, unreadable, or undecodable table loads as
    /// empty. Persisted history is best-effort.
    fn load(&self) -> ProfileTable;

    /// Replaces the persisted table with `table`.
    fn save(&self, table: &ProfileTable) -> Result<()>;
}
