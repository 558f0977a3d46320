//! The player's side of an encounter.

use crate::combat::{Combatant, apply_damage, mitigate_flat};
use crate::equipment::{Armor, CharacterClass, EquipmentFacade, Weapon};

/// A player-controlled combatant.
///
/// Damage is the base damage plus the equipped weapon's damage. Worn armor
/// subtracts its defense from every hit taken.
pub struct PlayableCharacter {
    name: String,
    class: CharacterClass,
    health: u32,
    base_damage: u32,
    weapon: Option<Box<dyn Weapon>>,
    armor: Option<Box<dyn Armor>>,
}

impl PlayableCharacter {
    pub const BASE_HEALTH: u32 = 100;
    pub const BASE_DAMAGE: u32 = 5;

    /// Creates an unequipped character.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            name: name.into(),
            class,
            health: Self::BASE_HEALTH,
            base_damage: Self::BASE_DAMAGE,
            weapon: None,
            armor: None,
        }
    }

    /// Creates a character wearing the starter set of the facade's class.
    pub fn with_starter_set(name: impl Into<String>, equipment: &EquipmentFacade) -> Self {
        let (weapon, armor) = equipment.starter_set();
        let mut character = Self::new(name, equipment.class());
        character.equip_weapon(weapon);
        character.equip_armor(armor);
        character
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn weapon(&self) -> Option<&dyn Weapon> {
        self.weapon.as_deref()
    }

    pub fn armor(&self) -> Option<&dyn Armor> {
        self.armor.as_deref()
    }

    /// Equips a weapon, returning the previously equipped one if any.
    pub fn equip_weapon(&mut self, weapon: Box<dyn Weapon>) -> Option<Box<dyn Weapon>> {
        self.weapon.replace(weapon)
    }

    /// Equips armor, returning the previously worn armor if any.
    pub fn equip_armor(&mut self, armor: Box<dyn Armor>) -> Option<Box<dyn Armor>> {
        self.armor.replace(armor)
    }
}

impl Combatant for PlayableCharacter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn damage(&self) -> u32 {
        self.base_damage + self.weapon.as_ref().map_or(0, |weapon| weapon.damage())
    }

    fn take_damage(&mut self, amount: u32) {
        let defense = self.armor.as_ref().map_or(0, |armor| armor.defense());
        self.health = apply_damage(self.health, mitigate_flat(amount, defense));
    }

    fn attack(&mut self, target: &mut dyn Combatant) {
        if let Some(weapon) = self.weapon.as_mut() {
            weapon.use_weapon();
        }
        target.take_damage(self.damage());
    }
}
