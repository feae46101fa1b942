//! Item system: item types and equipment slots.

pub mod equipment;
pub mod types;

pub use equipment::*;
pub use types::*;
