//! Items, class chests, and the facade that selects between them.
//!
//! - [`items`]: weapon and armor traits plus the concrete gear
//! - [`chest`]: one [`EquipmentChest`] per [`CharacterClass`]
//! - [`facade`]: [`EquipmentFacade`], the single entry point callers use

pub mod chest;
pub mod facade;
pub mod items;

pub use chest::{CharacterClass, EquipmentChest, MageChest, ThiefChest, WarriorChest};
pub use facade::EquipmentFacade;
pub use items::{
    Armor, ArmorKind, Dagger, LeatherArmor, MagicStaff, PlateArmor, Robe, Sword, Weapon,
    WeaponKind,
};
