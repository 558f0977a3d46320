//! Per-class equipment chests.

use strum::{Display, EnumIter, EnumString, FromRepr};

use super::items::{Armor, Dagger, LeatherArmor, MagicStaff, PlateArmor, Robe, Sword, Weapon};

/// Playable classes. Each one draws its gear from its own chest.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum CharacterClass {
    Warrior = 0,
    Mage = 1,
    Thief = 2,
}

/// Factory for a matching weapon and armor pair.
pub trait EquipmentChest: Send + Sync {
    fn weapon(&self) -> Box<dyn Weapon>;

    fn armor(&self) -> Box<dyn Armor>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WarriorChest;

impl EquipmentChest for WarriorChest {
    fn weapon(&self) -> Box<dyn Weapon> {
        Box::new(Sword::new())
    }

    fn armor(&self) -> Box<dyn Armor> {
        Box::new(PlateArmor)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MageChest;

impl EquipmentChest for MageChest {
    fn weapon(&self) -> Box<dyn Weapon> {
        Box::new(MagicStaff::new())
    }

    fn armor(&self) -> Box<dyn Armor> {
        Box::new(Robe)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThiefChest;

impl EquipmentChest for ThiefChest {
    fn weapon(&self) -> Box<dyn Weapon> {
        Box::new(Dagger::new())
    }

    fn armor(&self) -> Box<dyn Armor> {
        Box::new(LeatherArmor)
    }
}
