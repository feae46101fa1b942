//! Dungeon Dice - Text-Based Role-Playing Game Library
//!
//! The character model and dice live in the core modules; `ui` renders them
//! to the console and `config` handles settings and arguments.

pub mod character;
pub mod config;
pub mod core;
pub mod items;
pub mod ui;

pub use character::{Character, CharacterError, CharacterEvent, CombatStat, LevelUp, RestOutcome};
pub use config::{ConfigError, GameConfig};
pub use crate::core::dice::{Dice, LoadedDice};
pub use items::{Equipment, EquipmentSlot, Item};
