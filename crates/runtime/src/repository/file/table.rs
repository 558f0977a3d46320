//! File-based TableStorage implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{ProfileTable, RepositoryError, Result, TableFormat, TableStorage};

/// Stores the whole profile table in a single file.
///
/// # File Format
///
/// The complete [`ProfileTable`] encoded with the configured
/// [`TableFormat`]. Saves go to `<file>.tmp` first and are renamed over the
/// real file, so a crash mid-write leaves the previous table intact.
pub struct FileTableStorage {
    path: PathBuf,
    format: TableFormat,
}

impl FileTableStorage {
    /// Default file name of the score table.
    pub const DEFAULT_FILE_NAME: &'static str = "score.dat";

    /// Opens the table at `path`, writing an empty table if the file is absent.
    pub fn open(path: impl AsRef<Path>, format: TableFormat) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let storage = Self { path, format };
        if !storage.path.exists() {
            storage.save(&ProfileTable::new())?;
        }
        Ok(storage)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl TableStorage for FileTableStorage {
    fn load(&self) -> ProfileTable {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    "Failed to read profile table {}: {}; starting empty",
                    self.path.display(),
                    e
                );
                return ProfileTable::new();
            }
        };

        match self.format.decode(&bytes) {
            Ok(table) => {
                tracing::debug!(
                    "Loaded {} profiles from {}",
                    table.len(),
                    self.path.display()
                );
                table
            }
            Err(e) => {
                tracing::warn!(
                    "Profile table {} is unreadable ({}); starting empty",
                    self.path.display(),
                    e
                );
                ProfileTable::new()
            }
        }
    }

    fn save(&self, table: &ProfileTable) -> Result<()> {
        let bytes = self.format.encode(table)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} profiles to {}", table.len(), self.path.display());

        Ok(())
    }
}
