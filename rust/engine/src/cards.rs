use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five firework colours.
/// Used as a component of [`Card`] and as the subject of colour clues.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Red (R)
    Red,
    /// Green (G)
    Green,
    /// Blue (B)
    Blue,
    /// White (W)
    White,
    /// Yellow (Y)
    Yellow,
}

impl Suit {
    pub const ALL: [Suit; 5] = [Suit::Red, Suit::Green, Suit::Blue, Suit::White, Suit::Yellow];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter token used in card notation (`R1`, `G5`, ...).
    pub const fn letter(self) -> char {
        match self {
            Suit::Red => 'R',
            Suit::Green => 'G',
            Suit::Blue => 'B',
            Suit::White => 'W',
            Suit::Yellow => 'Y',
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.letter() == c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Red => "Red",
            Suit::Green => "Green",
            Suit::Blue => "Blue",
            Suit::White => "White",
            Suit::Yellow => "Yellow",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank from One through Five.
/// Numeric values match the printed digit, so a suit's next playable rank is `top + 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 1
    One = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
}

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::One),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            _ => None,
        }
    }

    /// How many copies of this rank a standard deck holds per suit.
    pub const fn copies(self) -> usize {
        match self {
            Rank::One => 3,
            Rank::Two | Rank::Three | Rank::Four => 2,
            Rank::Five => 1,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A card identity: suit plus rank. Never mutated once created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The colour of the card
    pub suit: Suit,
    /// The rank of the card (One through Five)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank.value())
    }
}

/// The 50-card deck in suit-major order: per suit three 1s, two each of 2-4, one 5.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(50);
    for &s in &Suit::ALL {
        for &r in &Rank::ALL {
            for _ in 0..r.copies() {
                v.push(Card::new(s, r));
            }
        }
    }
    v
}
