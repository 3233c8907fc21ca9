use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// One replayed log entry, already decoded from text.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Deal a new game: the first cards go to the two hands, the rest form the deck
    StartGame { cards: Vec<Card> },
    /// Active player plays the card at `position`
    Play { position: usize },
    /// Active player discards the card at `position`
    Drop { position: usize },
    /// Active player tells the other player which positions hold `suit`
    ClueSuit { suit: Suit, positions: Vec<usize> },
    /// Active player tells the other player which positions hold `rank`
    ClueRank { rank: Rank, positions: Vec<usize> },
}

/// Command discriminant, used for bookkeeping and logs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    StartGame,
    Play,
    Drop,
    ClueSuit,
    ClueRank,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::StartGame { .. } => CommandKind::StartGame,
            Command::Play { .. } => CommandKind::Play,
            Command::Drop { .. } => CommandKind::Drop,
            Command::ClueSuit { .. } => CommandKind::ClueSuit,
            Command::ClueRank { .. } => CommandKind::ClueRank,
        }
    }
}

/// The property a clue asserts about the target's cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Hint {
    Suit(Suit),
    Rank(Rank),
}
