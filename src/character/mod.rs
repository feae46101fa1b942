//! Character stats, progression, and the events they produce.

#![allow(unused_imports)]

pub mod attributes;
pub mod errors;
pub mod events;
pub mod name;
pub mod player;

pub use attributes::*;
pub use errors::*;
pub use events::*;
pub use name::*;
pub use player::*;
