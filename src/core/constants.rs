// Starting vitals
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_MAX_HEALTH: u32 = 100;
pub const STARTING_MAX_MANA: u32 = 50;
pub const STARTING_GOLD: u64 = 25;
pub const STARTING_DUNGEON_LEVEL: u32 = 1;

// Starting combat stats
pub const STARTING_STRENGTH: u32 = 10;
pub const STARTING_DEFENSE: u32 = 8;
pub const STARTING_AGILITY: u32 = 7;
pub const STARTING_LUCK: u32 = 5;
pub const NUM_COMBAT_STATS: usize = 4;

// XP and leveling
pub const STARTING_XP_THRESHOLD: u64 = 100;
// Threshold grows by XP_GROWTH_NUMERATOR / XP_GROWTH_DENOMINATOR (1.5x), truncated
pub const XP_GROWTH_NUMERATOR: u64 = 3;
pub const XP_GROWTH_DENOMINATOR: u64 = 2;
pub const LEVEL_UP_HEALTH_GAIN_MIN: u32 = 8;
pub const LEVEL_UP_HEALTH_GAIN_MAX: u32 = 15;
pub const LEVEL_UP_MANA_GAIN_MIN: u32 = 3;
pub const LEVEL_UP_MANA_GAIN_MAX: u32 = 8;
pub const LEVEL_UP_STAT_POINTS: usize = 3;

// Combat
pub const ATTACK_DIE_SIDES: u32 = 6;
pub const MIN_DAMAGE_TAKEN: u32 = 1;

// Resting
pub const REST_HEALTH_MIN: u32 = 10;
pub const REST_HEALTH_MAX: u32 = 20;
pub const REST_MANA_MIN: u32 = 15;
pub const REST_MANA_MAX: u32 = 25;

