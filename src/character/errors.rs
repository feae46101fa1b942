use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    #[error("Invalid character name: {0}")]
    InvalidName(String),
    #[error("Not enough gold! Need {needed}, have {held}")]
    InsufficientGold { needed: u64, held: u64 },
}
