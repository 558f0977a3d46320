//! One-call access to class-appropriate equipment.

use super::chest::{CharacterClass, EquipmentChest, MageChest, ThiefChest, WarriorChest};
use super::items::{Armor, Weapon};
use crate::error::{GameError, Result};

/// Picks the chest for a character class and hands out its contents.
///
/// Holds nothing but the selected chest. Unknown classes are rejected by
/// [`EquipmentFacade::from_raw`] and [`EquipmentFacade::from_name`] before
/// any chest is built.
pub struct EquipmentFacade {
    class: CharacterClass,
    chest: Box<dyn EquipmentChest>,
}

impl EquipmentFacade {
    pub fn new(class: CharacterClass) -> Self {
        let chest: Box<dyn EquipmentChest> = match class {
            CharacterClass::Warrior => Box::new(WarriorChest),
            CharacterClass::Mage => Box::new(MageChest),
            CharacterClass::Thief => Box::new(ThiefChest),
        };
        Self { class, chest }
    }

    /// Builds the facade from a raw class id.
    pub fn from_raw(id: u8) -> Result<Self> {
        let class = CharacterClass::from_repr(id)
            .ok_or_else(|| GameError::UnknownCharacterClass(id.to_string()))?;
        Ok(Self::new(class))
    }

    /// Builds the facade from a class name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        let class = name
            .trim()
            .parse::<CharacterClass>()
            .map_err(|_| GameError::UnknownCharacterClass(name.to_string()))?;
        Ok(Self::new(class))
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn weapon(&self) -> Box<dyn Weapon> {
        self.chest.weapon()
    }

    pub fn starter_set(&self) -> (Box<dyn Weapon>, Box<dyn Armor>) {
        (self.chest.weapon(), self.chest.armor())
    }

    /// e.g. `"Weapon: Sword, Armor: PlateArmor"`.
    pub fn equipment_description(&self) -> String {
        let (weapon, armor) = self.starter_set();
        format!("Weapon: {}, Armor: {}", weapon.kind(), armor.kind())
    }
}
