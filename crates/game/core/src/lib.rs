//! Combat composition and equipment rules shared by the runtime and clients.
//!
//! `game-core` defines how fighters behave and how their gear is chosen. It
//! performs no I/O: narrative output and randomness are injected through the
//! seams in [`env`].
//!
//! - [`combat`]: the [`Combatant`] contract, enemy decorators, and the
//!   weapon-to-enemy adapter
//! - [`equipment`]: weapons, armor, per-class chests, and [`EquipmentFacade`]
//! - [`character`]: [`PlayableCharacter`]
pub mod character;
pub mod combat;
pub mod env;
pub mod equipment;
pub mod error;

#[cfg(test)]
mod testing;

pub use character::PlayableCharacter;
pub use combat::{
    Armored, ArmoredEnemy, Combatant, Enemy, EnemyDecorator, EnemyExt, EnemyModifier, Legendary,
    LegendaryEnemy, ModifierKind, WeaponEnemy, Windfury, WindfuryEnemy, decorate,
};
pub use env::{CombatLog, NullLog, PcgRng, RandomSource, SharedLog};
pub use equipment::{
    Armor, ArmorKind, CharacterClass, EquipmentChest, EquipmentFacade, Weapon, WeaponKind,
};
pub use error::{GameError, Result};
