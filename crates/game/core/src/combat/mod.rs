//! Combat model.
//!
//! # Architecture
//!
//! - [`Combatant`]: the contract every fighter implements
//! - [`Enemy`]: plain enemy with fixed stats
//! - [`EnemyDecorator`]: wraps one combatant and layers an [`EnemyModifier`]
//!   on top ([`Legendary`], [`Windfury`], [`Armored`])
//! - [`WeaponEnemy`]: a borrowed weapon fighting as an enemy
//!
//! # Core Functions
//!
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `reduce_damage`: fractional, truncating damage reduction
//! - `mitigate_flat`: flat damage reduction

pub mod adapter;
pub mod combatant;
pub mod damage;
pub mod decorator;

pub use adapter::WeaponEnemy;
pub use combatant::{Combatant, Enemy};
pub use damage::{apply_damage, mitigate_flat, reduce_damage};
pub use decorator::{
    Armored, ArmoredEnemy, EnemyDecorator, EnemyExt, EnemyModifier, Legendary, LegendaryEnemy,
    ModifierKind, Windfury, WindfuryEnemy, decorate,
};
