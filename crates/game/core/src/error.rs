//! Error types for game-core.
//!
//! The combat model itself is infallible: damage saturates, missing profiles
//! are created on demand, and decorators always delegate. The only failure
//! the core reports is a configuration mistake caught at construction time.

/// Errors surfaced by game-core constructors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A character class id or name did not match any known class.
    #[error("unknown character class: {0}")]
    UnknownCharacterClass(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
