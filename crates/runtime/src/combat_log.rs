//! Combat narrative routed into `tracing`.

use std::sync::Arc;

use game_core::{CombatLog, SharedLog};

/// [`CombatLog`] that emits every line as an INFO event on the `combat` target.
///
/// Filter it like any other target, e.g. `RUST_LOG=combat=info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingCombatLog;

impl TracingCombatLog {
    pub fn shared() -> SharedLog {
        Arc::new(Self)
    }
}

impl CombatLog for TracingCombatLog {
    fn log(&self, message: &str) {
        tracing::info!(target: "combat", "{}", message);
    }
}
