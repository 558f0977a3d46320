//! Write-through caching proxy over a profile repository.

use std::collections::HashMap;
use std::sync::RwLock;

use super::types::PlayerProfile;
use super::{ProfileRepository, RepositoryError, Result};

/// Caching proxy with the same contract as the repository it wraps.
///
/// # Reads
///
/// A cached profile is returned as is. On a miss the profile is fetched from
/// the backing repository (creating it there if needed) and cached.
///
/// # Writes
///
/// Write-through: an update is acknowledged only after the backing
/// repository accepted it. On a miss the cache is refilled from the backing
/// repository after the update, so it holds whatever the backing side
/// canonically stored. On a hit the cached score is changed in place. A
/// failed backing write leaves the cached entry untouched.
///
/// The cache is process-local and never evicts on its own; see
/// [`CachedProfileRepository::invalidate`].
pub struct CachedProfileRepository<R> {
    backing: R,
    cache: RwLock<HashMap<String, PlayerProfile>>,
}

impl<R: ProfileRepository> CachedProfileRepository<R> {
    pub fn new(backing: R) -> Self {
        Self {
            backing,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn backing(&self) -> &R {
        &self.backing
    }

    /// Number of cached profiles.
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Drops `name` from the cache. Returns whether it was cached.
    pub fn invalidate(&self, name: &str) -> Result<bool> {
        let mut cache = self
            .cache
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(cache.remove(name).is_some())
    }
}

impl<R: ProfileRepository> ProfileRepository for CachedProfileRepository<R> {
    fn get_profile(&self, name: &str) -> Result<PlayerProfile> {
        {
            let cache = self
                .cache
                .read()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            if let Some(profile) = cache.get(name) {
                tracing::debug!("Profile {} served from cache", name);
                return Ok(profile.clone());
            }
        }

        let mut cache = self
            .cache
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        // Another caller may have filled the entry while we waited.
        if let Some(profile) = cache.get(name) {
            return Ok(profile.clone());
        }

        tracing::debug!("Profile {} not cached, loading from backing store", name);
        let profile = self.backing.get_profile(name)?;
        cache.insert(name.to_string(), profile.clone());
        Ok(profile)
    }

    fn update_high_score(&self, name: &str, score: u32) -> Result<()> {
        let mut cache = self
            .cache
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match cache.get_mut(name) {
            Some(profile) => {
                self.backing.update_high_score(name, score)?;
                profile.score = score;
                tracing::debug!("Score of {} updated in cache and backing store", name);
            }
            None => {
                tracing::debug!("Profile {} not cached, updating backing store", name);
                self.backing.update_high_score(name, score)?;
                let profile = self.backing.get_profile(name)?;
                cache.insert(name.to_string(), profile);
            }
        }

        Ok(())
    }
}
