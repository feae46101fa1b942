use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }

    /// Returns the display name for this slot.
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// An equippable item with flat combat bonuses.
///
/// Bonuses a slot doesn't use stay at zero; missing fields in serialized
/// items default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub slot: EquipmentSlot,
    /// Added to attack power while equipped as a weapon.
    #[serde(default)]
    pub damage: u32,
    /// Added to defense value while equipped as armor.
    #[serde(default)]
    pub defense: u32,
}

impl Item {
    pub fn weapon(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            slot: EquipmentSlot::Weapon,
            damage,
            defense: 0,
        }
    }

    pub fn armor(name: impl Into<String>, defense: u32) -> Self {
        Self {
            name: name.into(),
            slot: EquipmentSlot::Armor,
            damage: 0,
            defense,
        }
    }

    pub fn accessory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot: EquipmentSlot::Accessory,
            damage: 0,
            defense: 0,
        }
    }
}
