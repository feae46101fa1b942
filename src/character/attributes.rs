use crate::core::constants::{
    NUM_COMBAT_STATS, STARTING_AGILITY, STARTING_DEFENSE, STARTING_LUCK, STARTING_STRENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStat {
    Strength,
    Defense,
    Agility,
    Luck,
}

impl CombatStat {
    pub fn all() -> [CombatStat; NUM_COMBAT_STATS] {
        [
            CombatStat::Strength,
            CombatStat::Defense,
            CombatStat::Agility,
            CombatStat::Luck,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CombatStat::Strength => "Strength",
            CombatStat::Defense => "Defense",
            CombatStat::Agility => "Agility",
            CombatStat::Luck => "Luck",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            CombatStat::Strength => 0,
            CombatStat::Defense => 1,
            CombatStat::Agility => 2,
            CombatStat::Luck => 3,
        }
    }
}

/// The four combat stats. Only level-ups raise them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatStats {
    values: [u32; NUM_COMBAT_STATS],
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatStats {
    /// Starting stats for a fresh character.
    pub fn new() -> Self {
        Self::from_values(
            STARTING_STRENGTH,
            STARTING_DEFENSE,
            STARTING_AGILITY,
            STARTING_LUCK,
        )
    }

    pub fn from_values(strength: u32, defense: u32, agility: u32, luck: u32) -> Self {
        Self {
            values: [strength, defense, agility, luck],
        }
    }

    pub fn get(&self, stat: CombatStat) -> u32 {
        self.values[stat.index()]
    }

    pub fn increment(&mut self, stat: CombatStat) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, stat: CombatStat, value: u32) {
        self.values[stat.index()] = value;
    }
}
