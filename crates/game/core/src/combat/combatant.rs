//! The shared combat contract and the plain enemy that implements it.

use super::damage::apply_damage;

/// Anything that can fight: enemies, decorated enemies, animated weapons,
/// and playable characters.
///
/// # Invariant
///
/// `is_alive() == (health() > 0)`. Health is unsigned and damage saturates,
/// so implementations get this for free by keeping the default.
pub trait Combatant: Send {
    /// Display name.
    fn name(&self) -> String;

    /// Current hit points.
    fn health(&self) -> u32;

    /// Damage dealt by one regular attack.
    fn damage(&self) -> u32;

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Receive `amount` points of damage.
    fn take_damage(&mut self, amount: u32);

    /// Perform one attack against `target`.
    fn attack(&mut self, target: &mut dyn Combatant);
}

impl<T: Combatant + ?Sized> Combatant for Box<T> {
    #[inline]
    fn name(&self) -> String {
        (**self).name()
    }

    #[inline]
    fn health(&self) -> u32 {
        (**self).health()
    }

    #[inline]
    fn damage(&self) -> u32 {
        (**self).damage()
    }

    #[inline]
    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }

    #[inline]
    fn take_damage(&mut self, amount: u32) {
        (**self).take_damage(amount)
    }

    #[inline]
    fn attack(&mut self, target: &mut dyn Combatant) {
        (**self).attack(target)
    }
}

/// Undecorated enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    health: u32,
    damage: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: u32, damage: u32) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
        }
    }

    /// Weak melee enemy used by the encounter driver.
    pub fn goblin() -> Self {
        Self::new("Goblin", 60, 8)
    }
}

impl Combatant for Enemy {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = apply_damage(self.health, amount);
    }

    fn attack(&mut self, target: &mut dyn Combatant) {
        target.take_damage(self.damage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Dummy;

    #[test]
    fn attack_deals_own_damage_once() {
        let mut goblin = Enemy::new("Goblin", 30, 7);
        let mut dummy = Dummy::new(100);

        goblin.attack(&mut dummy);

        assert_eq!(dummy.health(), 93);
        assert_eq!(dummy.hits(), &[7]);
    }

    #[test]
    fn overkill_leaves_zero_health_and_dead() {
        let mut goblin = Enemy::new("Goblin", 5, 7);
        goblin.take_damage(12);

        assert_eq!(goblin.health(), 0);
        assert!(!goblin.is_alive());
    }

    #[test]
    fn boxed_combatant_forwards() {
        let mut boxed: Box<dyn Combatant> = Box::new(Enemy::new("Rat", 10, 2));
        boxed.take_damage(4);

        assert_eq!(boxed.name(), "Rat");
        assert_eq!(boxed.health(), 6);
        assert!(boxed.is_alive());
    }
}
