use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Card position {position} out of range for hand of {len}")]
    IndexOutOfRange { position: usize, len: usize },
    #[error("No game in progress")]
    NoGameInProgress,
    #[error("Start command needs at least {needed} cards, got {got}")]
    NotEnoughCards { needed: usize, got: usize },
    #[error("Start command is not a gameplay command")]
    NotGameplay,
}
