use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Highest rank a suit can reach.
pub const MAX_RANK: u8 = 5;

/// Score of a completed board: every suit played up to rank five.
pub const MAX_SCORE: u32 = MAX_RANK as u32 * Suit::ALL.len() as u32;

/// Fireworks on the table: the top rank played for each suit, 0 when none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tops: [u8; 5],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self, suit: Suit) -> u8 {
        self.tops[suit.index()]
    }

    pub fn can_play(&self, card: Card) -> bool {
        self.top(card.suit) + 1 == card.rank.value()
    }

    /// Puts `card` on top of its suit. Callers check [`Board::can_play`] first.
    pub fn add_card(&mut self, card: Card) {
        debug_assert!(self.can_play(card), "{} is not playable", card);
        self.tops[card.suit.index()] = card.rank.value();
    }

    pub fn score(&self) -> u32 {
        self.tops.iter().map(|&t| u32::from(t)).sum()
    }

    /// Number of cards on the table. Same value as [`Board::score`].
    pub fn depth(&self) -> u32 {
        self.score()
    }

    pub fn is_full(&self) -> bool {
        self.score() == MAX_SCORE
    }
}
