//! In-memory TableStorage implementation for tests and dry runs.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::repository::{ProfileTable, RepositoryError, Result, TableFormat, TableStorage};

/// Keeps the encoded table in memory.
///
/// The table goes through the same encoding as on disk, so decode failures
/// behave exactly like a damaged file.
pub struct MemoryTableStorage {
    format: TableFormat,
    bytes: RwLock<Option<Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryTableStorage {
    /// Storage with no table yet; loads as empty.
    pub fn new(format: TableFormat) -> Self {
        Self {
            format,
            bytes: RwLock::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    /// Storage preloaded with raw bytes, possibly not a valid table.
    pub fn from_bytes(format: TableFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            bytes: RwLock::new(Some(bytes)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of completed saves.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MemoryTableStorage {
    fn default() -> Self {
        Self::new(TableFormat::default())
    }
}

impl TableStorage for MemoryTableStorage {
    fn load(&self) -> ProfileTable {
        let Ok(bytes) = self.bytes.read() else {
            tracing::warn!("In-memory profile table lock poisoned; starting empty");
            return ProfileTable::new();
        };

        match bytes.as_deref() {
            None => ProfileTable::new(),
            Some(bytes) => self.format.decode(bytes).unwrap_or_else(|e| {
                tracing::warn!("In-memory profile table is unreadable ({}); starting empty", e);
                ProfileTable::new()
            }),
        }
    }

    fn save(&self, table: &ProfileTable) -> Result<()> {
        let encoded = self.format.encode(table)?;
        let mut bytes = self
            .bytes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *bytes = Some(encoded);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::PlayerProfile;

    #[test]
    fn starts_empty() {
        let storage = MemoryTableStorage::default();

        assert!(storage.load().is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn save_then_load() {
        let storage = MemoryTableStorage::new(TableFormat::Json);
        let mut table = ProfileTable::new();
        table.insert("Alice".to_string(), PlayerProfile::new("Alice", 5));

        storage.save(&table).unwrap();

        assert_eq!(storage.load(), table);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn undecodable_bytes_load_empty() {
        let storage = MemoryTableStorage::from_bytes(TableFormat::Json, b"{broken".to_vec());

        assert!(storage.load().is_empty());
    }
}
