//! Outcomes produced by character operations.
//!
//! Every mutator on [`Character`](super::Character) records what happened as
//! a [`CharacterEvent`]. The presentation layer drains and renders them; the
//! character itself never writes output.

use super::attributes::CombatStat;
use crate::items::types::EquipmentSlot;

/// Summary of a single level gained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub health_gain: u32,
    pub mana_gain: u32,
    /// Stats raised by one point each; a stat may appear more than once.
    pub stats_raised: Vec<CombatStat>,
}

/// Effective recovery from a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestOutcome {
    pub health_recovered: u32,
    pub mana_recovered: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterEvent {
    DamageTaken { damage: u32 },
    Healed { amount: u32 },
    AlreadyAtFullHealth,
    ExperienceGained { amount: u64 },
    LeveledUp(LevelUp),
    GoldGained { amount: u64 },
    GoldSpent { amount: u64 },
    InsufficientGold { needed: u64, held: u64 },
    ManaRecovered { amount: u32 },
    Rested,
    Equipped { slot: EquipmentSlot, item_name: String },
    Unequipped { slot: EquipmentSlot, item_name: String },
}
