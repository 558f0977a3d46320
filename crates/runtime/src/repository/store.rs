//! Profile repository backed by whole-table storage.

use std::path::Path;
use std::sync::Mutex;

use super::file::FileTableStorage;
use super::memory::MemoryTableStorage;
use super::types::{PlayerProfile, ProfileTable, TableFormat};
use super::{ProfileRepository, RepositoryError, Result, TableStorage};

/// [`ProfileRepository`] over a [`TableStorage`].
///
/// Each call runs one load-mutate-save cycle under a mutex, so two callers
/// sharing a store never lose each other's updates. The cycle is not atomic
/// across process crashes beyond what the storage itself guarantees.
pub struct ProfileStore<S> {
    storage: S,
    cycle: Mutex<()>,
}

/// Profile store persisted to a file.
pub type FileProfileStore = ProfileStore<FileTableStorage>;

/// Profile store kept in memory, for tests and dry runs.
pub type InMemoryProfileStore = ProfileStore<MemoryTableStorage>;

impl<S: TableStorage> ProfileStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            cycle: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Runs `mutate` against the freshly loaded table and saves the table
    /// back when `mutate` reports a change.
    fn transaction<T>(&self, mutate: impl FnOnce(&mut ProfileTable) -> (T, bool)) -> Result<T> {
        let _guard = self
            .cycle
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut table = self.storage.load();
        let (value, changed) = mutate(&mut table);
        if changed {
            self.storage.save(&table)?;
        }
        Ok(value)
    }
}

impl FileProfileStore {
    /// Opens the score file at `path`, creating an empty one if absent.
    pub fn open(path: impl AsRef<Path>, format: TableFormat) -> Result<Self> {
        Ok(Self::new(FileTableStorage::open(path, format)?))
    }
}

impl InMemoryProfileStore {
    /// Empty in-memory store using the default encoding.
    pub fn in_memory() -> Self {
        Self::new(MemoryTableStorage::default())
    }
}

/// Inserts a zero-score profile for `name` if none exists.
///
/// Returns whether a profile was created.
fn ensure_profile(table: &mut ProfileTable, name: &str) -> bool {
    if table.contains_key(name) {
        return false;
    }
    tracing::debug!("Creating profile for {}", name);
    table.insert(name.to_string(), PlayerProfile::empty(name));
    true
}

impl<S: TableStorage> ProfileRepository for ProfileStore<S> {
    fn get_profile(&self, name: &str) -> Result<PlayerProfile> {
        tracing::debug!("Loading profile {} from store", name);
        self.transaction(|table| {
            let created = ensure_profile(table, name);
            let profile = table
                .get(name)
                .cloned()
                .unwrap_or_else(|| PlayerProfile::empty(name));
            (profile, created)
        })
    }

    fn update_high_score(&self, name: &str, score: u32) -> Result<()> {
        tracing::debug!("Updating score of {} to {} in store", name, score);
        self.transaction(|table| {
            ensure_profile(table, name);
            if let Some(profile) = table.get_mut(name) {
                profile.score = score;
            }
            ((), true)
        })
    }
}
