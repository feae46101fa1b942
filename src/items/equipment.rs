use super::types::{EquipmentSlot, Item};

/// Character equipment slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Accessory => &self.accessory,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        }
    }

    /// Puts the item into its own slot, returning whatever was there before.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slot_mut(item.slot).replace(item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Damage bonus from the equipped weapon (0 when unarmed).
    pub fn weapon_damage(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |item| item.damage)
    }

    /// Defense bonus from the equipped armor (0 when unarmored).
    pub fn armor_defense(&self) -> u32 {
        self.armor.as_ref().map_or(0, |item| item.defense)
    }
}
