//! Capabilities the combat model borrows from its environment.
//!
//! game-core stays free of I/O. The embedding crate supplies:
//! - [`CombatLog`]: where narrative combat events go
//! - [`RandomSource`]: where chance rolls come from
mod log;
mod rng;

pub use log::{CombatLog, NullLog, SharedLog};
pub use rng::{PcgRng, RandomSource};
