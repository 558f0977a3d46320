//! Animated weapons: a [`Weapon`] fighting on its own as an enemy.

use super::combatant::Combatant;
use super::damage::apply_damage;
use crate::env::{RandomSource, SharedLog};
use crate::equipment::Weapon;

/// Presents a borrowed weapon as a [`Combatant`].
///
/// The weapon stays owned by whoever wields it; the adapter only borrows it
/// for the duration of the fight. Every hit the adapter takes may dispel the
/// enchantment: after the regular damage is applied, a roll at or below
/// [`WeaponEnemy::DISPEL_PROBABILITY`] drops health to 0.
pub struct WeaponEnemy<'w> {
    weapon: &'w mut dyn Weapon,
    health: u32,
    damage: u32,
    rng: Box<dyn RandomSource>,
    log: SharedLog,
}

impl<'w> WeaponEnemy<'w> {
    pub const NAME: &'static str = "Animated Weapon";
    pub const HEALTH: u32 = 50;
    pub const DISPEL_PROBABILITY: f32 = 0.2;

    pub fn new(weapon: &'w mut dyn Weapon, rng: Box<dyn RandomSource>, log: SharedLog) -> Self {
        let damage = weapon.damage();
        Self {
            weapon,
            health: Self::HEALTH,
            damage,
            rng,
            log,
        }
    }

    pub fn weapon(&self) -> &dyn Weapon {
        &*self.weapon
    }
}

impl Combatant for WeaponEnemy<'_> {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn take_damage(&mut self, amount: u32) {
        self.log.log(&format!("{} takes {amount} damage!", Self::NAME));
        self.health = apply_damage(self.health, amount);

        if self.rng.next_unit() <= Self::DISPEL_PROBABILITY {
            self.log.log("The blow dispels the enchantment on the weapon!");
            self.health = 0;
        }

        if self.health > 0 {
            self.log
                .log(&format!("{} has {} health left", Self::NAME, self.health));
        }
    }

    fn attack(&mut self, target: &mut dyn Combatant) {
        self.log
            .log(&format!("{} attacks {}!", Self::NAME, target.name()));
        self.weapon.use_weapon();
        target.take_damage(self.damage);
    }
}
