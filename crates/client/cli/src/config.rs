//! Encounter configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::{Armored, ModifierKind};
use runtime::{FileTableStorage, TableFormat};
use strum::{Display, EnumString};

/// Which base enemy the player faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EnemyKind {
    #[default]
    Goblin,
    /// A loose sword animated into an enemy.
    Weapon,
}

/// Configuration values that failed to parse.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown enemy kind: {0}")]
    UnknownEnemy(String),

    #[error("unknown enemy modifier: {0}")]
    UnknownModifier(String),

    #[error("unknown score format: {0}")]
    UnknownFormat(String),
}

/// Configuration required to run one encounter.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub player_name: String,
    /// Validated when the equipment facade is built.
    pub player_class: String,
    pub enemy: EnemyKind,
    /// Applied in order; the first entry wraps the base enemy directly.
    pub modifiers: Vec<ModifierKind>,
    pub armor_reduction: f64,
    pub seed: Option<u64>,
    pub save_data_dir: Option<PathBuf>,
    pub score_format: TableFormat,
    pub max_rounds: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            player_name: "Hero".to_string(),
            player_class: "warrior".to_string(),
            enemy: EnemyKind::default(),
            modifiers: Vec::new(),
            armor_reduction: Armored::DEFAULT_REDUCTION,
            seed: None,
            save_data_dir: None,
            score_format: TableFormat::default(),
            max_rounds: 20,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLAYER_NAME` - Profile key (default: Hero)
    /// - `PLAYER_CLASS` - warrior, mage, or thief (default: warrior)
    /// - `ENEMY_KIND` - goblin or weapon (default: goblin)
    /// - `ENEMY_MODIFIERS` - Comma list, innermost first (default: none)
    /// - `ARMOR_REDUCTION` - Fraction absorbed by armored enemies (default: 0.3)
    /// - `GAME_SEED` - Seed for reproducible rolls (default: OS entropy)
    /// - `SAVE_DATA_DIR` - Directory of the score table (default: platform-specific)
    /// - `SCORE_FORMAT` - bincode or json (default: bincode)
    /// - `MAX_ROUNDS` - Round cap per encounter (default: 20)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(name) = env::var("PLAYER_NAME")
            && !name.trim().is_empty()
        {
            config.player_name = name.trim().to_string();
        }

        if let Ok(class) = env::var("PLAYER_CLASS") {
            config.player_class = class;
        }

        if let Ok(enemy) = env::var("ENEMY_KIND") {
            config.enemy = enemy
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownEnemy(enemy.clone()))?;
        }

        if let Ok(modifiers) = env::var("ENEMY_MODIFIERS") {
            config.modifiers = parse_modifiers(&modifiers)?;
        }

        if let Some(reduction) = read_env::<f64>("ARMOR_REDUCTION") {
            config.armor_reduction = reduction.clamp(0.0, 1.0);
        }

        config.seed = read_env::<u64>("GAME_SEED");

        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);

        if let Ok(format) = env::var("SCORE_FORMAT") {
            config.score_format = format
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownFormat(format.clone()))?;
        }

        if let Some(rounds) = read_env::<u32>("MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        Ok(config)
    }

    /// Location of the score table.
    pub fn score_path(&self) -> PathBuf {
        let dir = self.save_data_dir.clone().unwrap_or_else(default_data_dir);
        let file_name = match self.score_format {
            TableFormat::Bincode => FileTableStorage::DEFAULT_FILE_NAME,
            TableFormat::Json => "score.json",
        };
        dir.join(file_name)
    }
}

/// Parses a comma-separated modifier list, skipping empty entries.
pub fn parse_modifiers(raw: &str) -> Result<Vec<ModifierKind>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<ModifierKind>()
                .map_err(|_| ConfigError::UnknownModifier(entry.to_string()))
        })
        .collect()
}

/// Platform data directory, e.g. `~/.local/share/arena` on Linux.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
