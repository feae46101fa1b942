//! Text for character events.

use crate::character::CharacterEvent;
use crossterm::style::Color;

/// A single line of narration and the color it's printed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub text: String,
    pub color: Color,
}

impl Narration {
    fn new(text: String, color: Color) -> Self {
        Self { text, color }
    }
}

/// Describes an event from the point of view of the named character.
pub fn narrate(name: &str, event: &CharacterEvent) -> Vec<Narration> {
    let line = match event {
        CharacterEvent::DamageTaken { damage } => {
            Narration::new(format!("{} takes {} damage!", name, damage), Color::Red)
        }
        CharacterEvent::Healed { amount } => Narration::new(
            format!("{} heals for {} health!", name, amount),
            Color::Green,
        ),
        CharacterEvent::AlreadyAtFullHealth => Narration::new(
            format!("{} is already at full health!", name),
            Color::Yellow,
        ),
        CharacterEvent::ExperienceGained { amount } => Narration::new(
            format!("{} gains {} experience!", name, amount),
            Color::Cyan,
        ),
        CharacterEvent::LeveledUp(level_up) => {
            return vec![
                Narration::new("LEVEL UP!".to_string(), Color::Yellow),
                Narration::new(
                    format!("{} is now level {}!", name, level_up.new_level),
                    Color::Green,
                ),
                Narration::new(
                    format!(
                        "Health: +{} | Mana: +{}",
                        level_up.health_gain, level_up.mana_gain
                    ),
                    Color::Cyan,
                ),
                Narration::new(
                    format!(
                        "Stats increased: {}",
                        level_up
                            .stats_raised
                            .iter()
                            .map(|stat| stat.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                    Color::Magenta,
                ),
            ];
        }
        CharacterEvent::GoldGained { amount } => {
            Narration::new(format!("{} gains {} gold!", name, amount), Color::Yellow)
        }
        CharacterEvent::GoldSpent { amount } => {
            Narration::new(format!("{} spends {} gold.", name, amount), Color::Yellow)
        }
        CharacterEvent::InsufficientGold { needed, held } => Narration::new(
            format!("Not enough gold! Need {}, have {}", needed, held),
            Color::Red,
        ),
        CharacterEvent::ManaRecovered { amount } => Narration::new(
            format!("{} recovers {} mana!", name, amount),
            Color::Blue,
        ),
        CharacterEvent::Rested => Narration::new(
            format!("{} feels refreshed after resting!", name),
            Color::Green,
        ),
        CharacterEvent::Equipped { slot, item_name } => Narration::new(
            format!("{} equips {} ({}).", name, item_name, slot.name()),
            Color::White,
        ),
        CharacterEvent::Unequipped { slot, item_name } => Narration::new(
            format!("{} removes {} ({}).", name, item_name, slot.name()),
            Color::White,
        ),
    };
    vec![line]
}
