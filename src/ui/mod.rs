//! Console presentation: character sheet, event narration, and banners.
//!
//! Nothing in here mutates game state; it reads a [`Character`](crate::Character)
//! snapshot or the events it drained.

pub mod console;
pub mod narration;
pub mod stats_panel;

pub use console::*;
pub use narration::*;
pub use stats_panel::*;
