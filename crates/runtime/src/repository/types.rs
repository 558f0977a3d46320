//! Persisted data types and their encodings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{RepositoryError, Result};

/// A player's persisted progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub score: u32,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Fresh profile with score 0.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }
}

/// All profiles, keyed by player name.
pub type ProfileTable = BTreeMap<String, PlayerProfile>;

/// Physical encoding of a [`ProfileTable`].
///
/// No schema version is stored. A table written by an incompatible build
/// fails to decode and is treated as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TableFormat {
    /// Compact binary encoding.
    #[default]
    Bincode,
    /// Human-readable JSON.
    Json,
}

impl TableFormat {
    pub fn encode(self, table: &ProfileTable) -> Result<Vec<u8>> {
        match self {
            Self::Bincode => {
                bincode::serialize(table).map_err(|e| RepositoryError::Serialization(e.to_string()))
            }
            Self::Json => {
                serde_json::to_vec_pretty(table).map_err(|e| RepositoryError::Json(e.to_string()))
            }
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<ProfileTable> {
        match self {
            Self::Bincode => bincode::deserialize(bytes)
                .map_err(|e| RepositoryError::Serialization(e.to_string())),
            Self::Json => {
                serde_json::from_slice(bytes).map_err(|e| RepositoryError::Json(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileTable {
        let mut table = ProfileTable::new();
        table.insert("Alice".to_string(), PlayerProfile::new("Alice", 120));
        table.insert("Bob".to_string(), PlayerProfile::empty("Bob"));
        table
    }

    #[test]
    fn json_output_is_readable() {
        let bytes = TableFormat::Json.encode(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"Alice\""));
        assert!(text.contains("120"));
    }

    #[test]
    fn garbage_does_not_decode() {
        assert!(TableFormat::Json.decode(b"not json").is_err());
        assert!(TableFormat::Bincode.decode(&[0xff; 3]).is_err());
    }

    #[test]
    fn formats_are_not_interchangeable() {
        let bytes = TableFormat::Json.encode(&sample()).unwrap();

        assert!(TableFormat::Bincode.decode(&bytes).is_err());
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("json".parse::<TableFormat>(), Ok(TableFormat::Json));
        assert_eq!("Bincode".parse::<TableFormat>(), Ok(TableFormat::Bincode));
        assert_eq!(TableFormat::default().to_string(), "bincode");
    }
}
