//! Weapons and armor handed out by the equipment chests.

use strum::{Display, IntoStaticStr};

/// Concrete weapon types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum WeaponKind {
    Sword,
    MagicStaff,
    Dagger,
}

/// Concrete armor types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ArmorKind {
    PlateArmor,
    Robe,
    LeatherArmor,
}

/// Something that can be swung, cast, or stabbed with.
pub trait Weapon: Send {
    fn kind(&self) -> WeaponKind;

    fn damage(&self) -> u32;

    /// Remaining durability charges.
    fn durability(&self) -> u32;

    /// Uses the weapon once, consuming one durability charge.
    fn use_weapon(&mut self);
}

/// Something that can be worn.
pub trait Armor: Send {
    fn kind(&self) -> ArmorKind;

    /// Flat amount subtracted from every incoming hit.
    fn defense(&self) -> u32;
}

macro_rules! weapon {
    ($(#[$meta:meta])* $name:ident, $kind:expr, damage: $damage:expr, durability: $durability:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            durability: u32,
        }

        impl $name {
            pub const DAMAGE: u32 = $damage;
            pub const MAX_DURABILITY: u32 = $durability;

            pub fn new() -> Self {
                Self {
                    durability: Self::MAX_DURABILITY,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Weapon for $name {
            fn kind(&self) -> WeaponKind {
                $kind
            }

            fn damage(&self) -> u32 {
                Self::DAMAGE
            }

            fn durability(&self) -> u32 {
                self.durability
            }

            fn use_weapon(&mut self) {
                self.durability = self.durability.saturating_sub(1);
            }
        }
    };
}

macro_rules! armor {
    ($(#[$meta:meta])* $name:ident, $kind:expr, defense: $defense:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub const DEFENSE: u32 = $defense;
        }

        impl Armor for $name {
            fn kind(&self) -> ArmorKind {
                $kind
            }

            fn defense(&self) -> u32 {
                Self::DEFENSE
            }
        }
    };
}

weapon!(
    /// Heavy one-handed blade.
    Sword, WeaponKind::Sword, damage: 15, durability: 40
);
weapon!(
    /// Focus for spellcasting; hits hard, wears out quickly.
    MagicStaff, WeaponKind::MagicStaff, damage: 18, durability: 25
);
weapon!(Dagger, WeaponKind::Dagger, damage: 10, durability: 60);

armor!(
    /// Heavy armor.
    PlateArmor, ArmorKind::PlateArmor, defense: 6
);
armor!(Robe, ArmorKind::Robe, defense: 1);
armor!(
    /// Light armor.
    LeatherArmor, ArmorKind::LeatherArmor, defense: 3
);
