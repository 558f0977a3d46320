//! Narrative log seam.
//!
//! Decorators and adapters describe what happens during a fight ("the enemy
//! strikes twice", "armor absorbs 30% of the damage"). They write those lines
//! to a [`CombatLog`] handed to them at construction instead of a
//! process-wide logger. One sink is usually shared by every combatant of an
//! encounter, hence the `Arc` in [`SharedLog`].

use std::sync::Arc;

/// Sink for human-readable combat events.
///
/// Implementations must not block indefinitely.
pub trait CombatLog: Send + Sync {
    fn log(&self, message: &str);
}

/// Shared handle to a log sink.
pub type SharedLog = Arc<dyn CombatLog>;

/// Discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLog;

impl NullLog {
    pub fn shared() -> SharedLog {
        Arc::new(Self)
    }
}

impl CombatLog for NullLog {
    fn log(&self, _message: &str) {}
}
