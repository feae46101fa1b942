use std::fmt;

use super::attributes::{CombatStat, CombatStats};
use super::errors::CharacterError;
use super::events::{CharacterEvent, LevelUp, RestOutcome};
use super::name::validate_name;
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::items::equipment::Equipment;
use crate::items::types::{EquipmentSlot, Item};

/// The player's progression record.
///
/// Vitals are kept within `0..=max` by every mutator, experience always sits
/// below the current threshold once a gain resolves, and gold never goes
/// negative. Mutators record [`CharacterEvent`]s which the caller drains with
/// [`Character::drain_events`].
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    level: u32,
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,
    experience: u64,
    experience_to_next_level: u64,
    stats: CombatStats,
    gold: u64,
    dungeon_level: u32,
    rooms_explored: u32,
    enemies_defeated: u32,
    equipment: Equipment,
    events: Vec<CharacterEvent>,
}

impl Character {
    /// Creates a level 1 character with starting stats.
    ///
    /// The name is trimmed; names left empty are rejected.
    pub fn new(name: &str) -> Result<Self, CharacterError> {
        let name = validate_name(name)?;
        tracing::debug!(%name, "character created");

        Ok(Self {
            name,
            level: STARTING_LEVEL,
            health: STARTING_MAX_HEALTH,
            max_health: STARTING_MAX_HEALTH,
            mana: STARTING_MAX_MANA,
            max_mana: STARTING_MAX_MANA,
            experience: 0,
            experience_to_next_level: STARTING_XP_THRESHOLD,
            stats: CombatStats::new(),
            gold: STARTING_GOLD,
            dungeon_level: STARTING_DUNGEON_LEVEL,
            rooms_explored: 0,
            enemies_defeated: 0,
            equipment: Equipment::new(),
            events: Vec::new(),
        })
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> u64 {
        self.experience_to_next_level
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn stat(&self, stat: CombatStat) -> u32 {
        self.stats.get(stat)
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn dungeon_level(&self) -> u32 {
        self.dungeon_level
    }

    pub fn rooms_explored(&self) -> u32 {
        self.rooms_explored
    }

    pub fn enemies_defeated(&self) -> u32 {
        self.enemies_defeated
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    // === Events ===

    /// Events recorded since the last drain, oldest first.
    pub fn pending_events(&self) -> &[CharacterEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }

    // === Vitals ===

    /// Applies incoming damage reduced by half the defense stat.
    ///
    /// At least 1 damage always lands. Returns the damage actually applied.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let mitigation = self.stats.get(CombatStat::Defense) / 2;
        let damage = amount.saturating_sub(mitigation).max(MIN_DAMAGE_TAKEN);
        self.health = self.health.saturating_sub(damage);

        tracing::debug!(name = %self.name, amount, damage, health = self.health, "took damage");
        self.events.push(CharacterEvent::DamageTaken { damage });
        damage
    }

    /// Restores health up to the maximum. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        let healed = self.health - before;

        if healed > 0 {
            tracing::debug!(name = %self.name, healed, health = self.health, "healed");
            self.events.push(CharacterEvent::Healed { amount: healed });
        } else {
            self.events.push(CharacterEvent::AlreadyAtFullHealth);
        }
        healed
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Rests to recover health and mana.
    pub fn rest(&mut self, dice: &mut impl Dice) -> RestOutcome {
        let health_roll = dice.roll(REST_HEALTH_MIN, REST_HEALTH_MAX);
        let mana_roll = dice.roll(REST_MANA_MIN, REST_MANA_MAX);

        let health_recovered = self.heal(health_roll);

        let before = self.mana;
        self.mana = self.mana.saturating_add(mana_roll).min(self.max_mana);
        let mana_recovered = self.mana - before;
        if mana_recovered > 0 {
            self.events.push(CharacterEvent::ManaRecovered {
                amount: mana_recovered,
            });
        }

        tracing::debug!(
            name = %self.name,
            health_recovered,
            mana_recovered,
            "rested"
        );
        self.events.push(CharacterEvent::Rested);

        RestOutcome {
            health_recovered,
            mana_recovered,
        }
    }

    // === Progression ===

    /// Adds experience and resolves every level-up it pays for.
    ///
    /// Returns one summary per level gained, in order.
    pub fn gain_experience(&mut self, amount: u64, dice: &mut impl Dice) -> Vec<LevelUp> {
        self.experience = self.experience.saturating_add(amount);
        self.events.push(CharacterEvent::ExperienceGained { amount });

        let mut level_ups = Vec::new();
        while self.experience >= self.experience_to_next_level {
            level_ups.push(self.level_up(dice));
        }
        level_ups
    }

    fn level_up(&mut self, dice: &mut impl Dice) -> LevelUp {
        self.level += 1;
        self.experience -= self.experience_to_next_level;
        self.experience_to_next_level = next_xp_threshold(self.experience_to_next_level);

        let health_gain = dice.roll(LEVEL_UP_HEALTH_GAIN_MIN, LEVEL_UP_HEALTH_GAIN_MAX);
        let mana_gain = dice.roll(LEVEL_UP_MANA_GAIN_MIN, LEVEL_UP_MANA_GAIN_MAX);

        self.max_health = self.max_health.saturating_add(health_gain);
        self.health = self.max_health;
        self.max_mana = self.max_mana.saturating_add(mana_gain);
        self.mana = self.max_mana;

        let choices = CombatStat::all();
        let stats_raised: Vec<CombatStat> = (0..LEVEL_UP_STAT_POINTS)
            .map(|_| choices[dice.pick(choices.len())])
            .collect();
        for stat in &stats_raised {
            self.stats.increment(*stat);
        }

        tracing::debug!(
            name = %self.name,
            level = self.level,
            health_gain,
            mana_gain,
            next_threshold = self.experience_to_next_level,
            "level up"
        );

        let summary = LevelUp {
            new_level: self.level,
            health_gain,
            mana_gain,
            stats_raised,
        };
        self.events.push(CharacterEvent::LeveledUp(summary.clone()));
        summary
    }

    // === Gold ===

    pub fn gain_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
        tracing::debug!(name = %self.name, amount, gold = self.gold, "gained gold");
        self.events.push(CharacterEvent::GoldGained { amount });
    }

    /// Spends gold if the character holds enough; otherwise nothing changes.
    pub fn spend_gold(&mut self, amount: u64) -> Result<(), CharacterError> {
        if self.gold < amount {
            tracing::warn!(name = %self.name, needed = amount, held = self.gold, "insufficient gold");
            self.events.push(CharacterEvent::InsufficientGold {
                needed: amount,
                held: self.gold,
            });
            return Err(CharacterError::InsufficientGold {
                needed: amount,
                held: self.gold,
            });
        }

        self.gold -= amount;
        tracing::debug!(name = %self.name, amount, gold = self.gold, "spent gold");
        self.events.push(CharacterEvent::GoldSpent { amount });
        Ok(())
    }

    // === Combat values ===

    /// Strength plus a d6 plus the equipped weapon's damage bonus.
    pub fn attack_power(&self, dice: &mut impl Dice) -> u32 {
        self.stats
            .get(CombatStat::Strength)
            .saturating_add(dice.roll_die(ATTACK_DIE_SIDES))
            .saturating_add(self.equipment.weapon_damage())
    }

    /// Defense stat plus the equipped armor's defense bonus.
    pub fn defense_value(&self) -> u32 {
        self.stats
            .get(CombatStat::Defense)
            .saturating_add(self.equipment.armor_defense())
    }

    // === Equipment ===

    /// Equips an item into its slot, returning the item it replaced.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let slot = item.slot;
        let item_name = item.name.clone();
        let previous = self.equipment.equip(item);
        self.events.push(CharacterEvent::Equipped { slot, item_name });
        previous
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        let removed = self.equipment.unequip(slot);
        if let Some(item) = &removed {
            self.events.push(CharacterEvent::Unequipped {
                slot,
                item_name: item.name.clone(),
            });
        }
        removed
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {}) - HP: {}/{}",
            self.name, self.level, self.health, self.max_health
        )
    }
}

/// Experience threshold that follows `current` (1.5x, truncated).
pub fn next_xp_threshold(current: u64) -> u64 {
    current.saturating_mul(XP_GROWTH_NUMERATOR) / XP_GROWTH_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::LoadedDice;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn rogan() -> Character {
        Character::new("Rogan").unwrap()
    }

    #[test]
    fn test_new_character_defaults() {
        let c = rogan();
        assert_eq!(c.name(), "Rogan");
        assert_eq!(c.level(), 1);
        assert_eq!((c.health(), c.max_health()), (100, 100));
        assert_eq!((c.mana(), c.max_mana()), (50, 50));
        assert_eq!(c.experience(), 0);
        assert_eq!(c.experience_to_next_level(), 100);
        assert_eq!(c.gold(), 25);
        assert_eq!(c.dungeon_level(), 1);
        assert_eq!(c.rooms_explored(), 0);
        assert_eq!(c.enemies_defeated(), 0);
        assert_eq!(c.equipment().iter_equipped().count(), 0);
        assert!(c.pending_events().is_empty());
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(matches!(
            Character::new("   "),
            Err(CharacterError::InvalidName(_))
        ));
    }

    #[test]
    fn test_take_damage_mitigated_by_half_defense() {
        let mut c = rogan();
        assert_eq!(c.take_damage(20), 16);
        assert_eq!(c.health(), 84);
        assert_eq!(c.drain_events(), vec![CharacterEvent::DamageTaken { damage: 16 }]);
    }

    #[test]
    fn test_take_damage_minimum_one() {
        let mut c = rogan();
        // Defense 8 mitigates 4; anything at or below that still deals 1
        assert_eq!(c.take_damage(0), 1);
        assert_eq!(c.take_damage(4), 1);
        assert_eq!(c.take_damage(5), 1);
        assert_eq!(c.take_damage(6), 2);
        assert_eq!(c.health(), 95);
    }

    #[test]
    fn test_take_damage_odd_defense_floors() {
        let mut c = rogan();
        c.stats.set(CombatStat::Defense, 9);
        assert_eq!(c.take_damage(20), 16);
    }

    #[test]
    fn test_take_damage_across_defense_values() {
        for defense in [0, 1, 2, 8, 31, u32::MAX] {
            for amount in [0, 1, 2, 15, 16, 17, 100, u32::MAX] {
                let mut c = rogan();
                c.stats.set(CombatStat::Defense, defense);
                let expected = amount.saturating_sub(defense / 2).max(1);
                assert_eq!(c.take_damage(amount), expected, "defense {defense}, amount {amount}");
                assert_eq!(c.health(), 100u32.saturating_sub(expected));
            }
        }
    }

    #[test]
    fn test_take_damage_floors_health_at_zero() {
        let mut c = rogan();
        assert_eq!(c.take_damage(500), 496);
        assert_eq!(c.health(), 0);
        assert!(!c.is_alive());
        assert_eq!(c.take_damage(u32::MAX), u32::MAX - 4);
        assert_eq!(c.health(), 0);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut c = rogan();
        c.take_damage(20);
        c.drain_events();

        assert_eq!(c.heal(50), 16);
        assert_eq!(c.health(), 100);
        assert_eq!(c.drain_events(), vec![CharacterEvent::Healed { amount: 16 }]);
    }

    #[test]
    fn test_heal_at_full_health() {
        let mut c = rogan();
        assert_eq!(c.heal(10), 0);
        assert_eq!(c.heal(u32::MAX), 0);
        assert_eq!(c.health(), 100);
        assert_eq!(
            c.drain_events(),
            vec![
                CharacterEvent::AlreadyAtFullHealth,
                CharacterEvent::AlreadyAtFullHealth
            ]
        );
    }

    #[test]
    fn test_is_alive() {
        let mut c = rogan();
        assert!(c.is_alive());
        c.health = 1;
        assert!(c.is_alive());
        c.health = 0;
        assert!(!c.is_alive());
    }

    #[test]
    fn test_gain_experience_below_threshold() {
        let mut c = rogan();
        let mut dice = LoadedDice::new(vec![]);
        assert!(c.gain_experience(99, &mut dice).is_empty());
        assert_eq!(c.level(), 1);
        assert_eq!(c.experience(), 99);
        assert_eq!(dice.rolls_made(), 0);
        assert_eq!(
            c.drain_events(),
            vec![CharacterEvent::ExperienceGained { amount: 99 }]
        );
    }

    #[test]
    fn test_single_level_up() {
        let mut c = rogan();
        c.take_damage(30);
        c.mana = 10;
        // health +12, mana +5, picks: strength, luck, strength
        let mut dice = LoadedDice::new(vec![12, 5, 0, 3, 0]);

        let level_ups = c.gain_experience(100, &mut dice);

        assert_eq!(level_ups.len(), 1);
        assert_eq!(
            level_ups[0],
            LevelUp {
                new_level: 2,
                health_gain: 12,
                mana_gain: 5,
                stats_raised: vec![CombatStat::Strength, CombatStat::Luck, CombatStat::Strength],
            }
        );
        assert_eq!(c.level(), 2);
        assert_eq!(c.experience(), 0);
        assert_eq!(c.experience_to_next_level(), 150);
        assert_eq!((c.health(), c.max_health()), (112, 112));
        assert_eq!((c.mana(), c.max_mana()), (55, 55));
        assert_eq!(c.stat(CombatStat::Strength), 12);
        assert_eq!(c.stat(CombatStat::Defense), 8);
        assert_eq!(c.stat(CombatStat::Agility), 7);
        assert_eq!(c.stat(CombatStat::Luck), 6);
    }

    #[test]
    fn test_large_gain_resolves_multiple_level_ups() {
        let mut c = rogan();
        let mut rng = create_test_rng();

        // 100 + 150 + 225 = 475 crosses three thresholds, 25 left over
        let level_ups = c.gain_experience(500, &mut rng);

        assert_eq!(level_ups.len(), 3);
        assert_eq!(c.level(), 4);
        assert_eq!(c.experience(), 25);
        assert_eq!(c.experience_to_next_level(), 337);
        assert!(c.experience() < c.experience_to_next_level());
        let levels: Vec<u32> = level_ups.iter().map(|l| l.new_level).collect();
        assert_eq!(levels, vec![2, 3, 4]);
    }

    #[test]
    fn test_level_up_gains_within_ranges() {
        let mut rng = create_test_rng();
        for _ in 0..200 {
            let mut c = rogan();
            let before = c.stats().total();
            let level_up = c.level_up(&mut rng);

            assert!((8..=15).contains(&level_up.health_gain));
            assert!((3..=8).contains(&level_up.mana_gain));
            assert_eq!(c.max_health(), 100 + level_up.health_gain);
            assert_eq!(c.max_mana(), 50 + level_up.mana_gain);
            assert_eq!(level_up.stats_raised.len(), 3);
            assert_eq!(c.stats().total(), before + 3);
        }
    }

    #[test]
    fn test_threshold_truncates_each_step() {
        let mut threshold = STARTING_XP_THRESHOLD;
        let expected = [150, 225, 337, 505, 757, 1135];
        for value in expected {
            threshold = next_xp_threshold(threshold);
            assert_eq!(threshold, value);
        }
    }

    #[test]
    fn test_gain_gold() {
        let mut c = rogan();
        c.gain_gold(40);
        assert_eq!(c.gold(), 65);
        assert_eq!(c.drain_events(), vec![CharacterEvent::GoldGained { amount: 40 }]);
    }

    #[test]
    fn test_spend_gold_insufficient() {
        let mut c = rogan();
        let result = c.spend_gold(30);
        assert_eq!(
            result,
            Err(CharacterError::InsufficientGold { needed: 30, held: 25 })
        );
        assert_eq!(c.gold(), 25);
        assert_eq!(
            c.drain_events(),
            vec![CharacterEvent::InsufficientGold { needed: 30, held: 25 }]
        );
    }

    #[test]
    fn test_spend_gold_exact_amount() {
        let mut c = rogan();
        assert!(c.spend_gold(25).is_ok());
        assert_eq!(c.gold(), 0);
        assert!(c.spend_gold(0).is_ok());
        assert!(c.spend_gold(1).is_err());
        assert_eq!(c.gold(), 0);
    }

    #[test]
    fn test_attack_power_without_weapon() {
        let c = rogan();
        let mut dice = LoadedDice::new(vec![4]);
        assert_eq!(c.attack_power(&mut dice), 14);
    }

    #[test]
    fn test_attack_power_with_weapon() {
        let mut c = rogan();
        c.equip(Item::weapon("Longsword", 5));
        let mut dice = LoadedDice::new(vec![6]);
        assert_eq!(c.attack_power(&mut dice), 21);
    }

    #[test]
    fn test_attack_power_range() {
        let c = rogan();
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let power = c.attack_power(&mut rng);
            assert!((11..=16).contains(&power));
        }
    }

    #[test]
    fn test_defense_value() {
        let mut c = rogan();
        assert_eq!(c.defense_value(), 8);
        c.equip(Item::armor("Chainmail", 4));
        assert_eq!(c.defense_value(), 12);
        c.unequip(EquipmentSlot::Armor);
        assert_eq!(c.defense_value(), 8);
    }

    #[test]
    fn test_combat_values_saturate_on_huge_bonuses() {
        let mut c = rogan();
        c.equip(Item::weapon("Godslayer", u32::MAX));
        c.equip(Item::armor("Aegis", u32::MAX));
        let mut dice = LoadedDice::new(vec![4]);
        assert_eq!(c.attack_power(&mut dice), u32::MAX);
        assert_eq!(c.defense_value(), u32::MAX);
    }

    #[test]
    fn test_armor_does_not_mitigate_take_damage() {
        let mut c = rogan();
        c.equip(Item::armor("Plate", 20));
        assert_eq!(c.take_damage(20), 16);
    }

    #[test]
    fn test_rest_recovers_and_clamps() {
        let mut c = rogan();
        c.take_damage(54); // 50 damage
        c.mana = 40;
        c.drain_events();
        let mut dice = LoadedDice::new(vec![15, 20]);

        let outcome = c.rest(&mut dice);

        assert_eq!(
            outcome,
            RestOutcome {
                health_recovered: 15,
                mana_recovered: 10,
            }
        );
        assert_eq!(c.health(), 65);
        assert_eq!(c.mana(), 50);
        assert_eq!(
            c.drain_events(),
            vec![
                CharacterEvent::Healed { amount: 15 },
                CharacterEvent::ManaRecovered { amount: 10 },
                CharacterEvent::Rested,
            ]
        );
    }

    #[test]
    fn test_rest_at_full() {
        let mut c = rogan();
        let mut rng = create_test_rng();
        let outcome = c.rest(&mut rng);

        assert_eq!(outcome, RestOutcome::default());
        assert_eq!(
            c.drain_events(),
            vec![CharacterEvent::AlreadyAtFullHealth, CharacterEvent::Rested]
        );
    }

    #[test]
    fn test_equip_and_unequip_events() {
        let mut c = rogan();
        assert!(c.equip(Item::weapon("Dagger", 2)).is_none());
        let previous = c.equip(Item::weapon("Axe", 4));
        assert_eq!(previous.unwrap().name, "Dagger");
        assert!(c.unequip(EquipmentSlot::Accessory).is_none());
        c.unequip(EquipmentSlot::Weapon);

        assert_eq!(
            c.drain_events(),
            vec![
                CharacterEvent::Equipped {
                    slot: EquipmentSlot::Weapon,
                    item_name: "Dagger".to_string()
                },
                CharacterEvent::Equipped {
                    slot: EquipmentSlot::Weapon,
                    item_name: "Axe".to_string()
                },
                CharacterEvent::Unequipped {
                    slot: EquipmentSlot::Weapon,
                    item_name: "Axe".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut c = rogan();
        c.take_damage(20);
        assert_eq!(c.to_string(), "Rogan (Level 1) - HP: 84/100");
    }
}
