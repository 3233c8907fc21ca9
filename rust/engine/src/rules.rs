use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::command::Hint;
use crate::hand::Hand;

/// Cards dealt to each player at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// A discard ends the game when fewer cards than this remain in the deck.
pub const DEFAULT_DROP_RESERVE: usize = 2;

/// Number of seats. Fixed; the turn engine alternates between two hands.
pub const PLAYERS: usize = 2;

/// Largest hand that a standard 50-card deck can deal to both players.
pub const MAX_HAND_SIZE: usize = 25;

/// Table parameters for a replay.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub hand_size: usize,
    pub drop_reserve: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            drop_reserve: DEFAULT_DROP_RESERVE,
        }
    }
}

impl Rules {
    /// Minimum number of cards a start command must carry, or `None` when
    /// `hand_size` is too large to count.
    pub fn cards_to_deal(&self) -> Option<usize> {
        self.hand_size.checked_mul(PLAYERS)
    }
}

/// Why a game stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// A card was played that does not extend its suit
    IllegalPlay,
    /// A clue named a set of positions that did not match the hand
    FalseClue,
    /// The deck ran out after a play, or fell below the reserve on a discard
    DeckExhausted,
    /// Every suit reached rank five
    BoardComplete,
    /// A command referred to a hand position that does not exist
    MalformedCommand,
}

/// Checks that `card` extends its suit on `board`.
///
/// # Examples
///
/// ```
/// use hanabi_engine::board::Board;
/// use hanabi_engine::cards::{Card, Rank, Suit};
/// use hanabi_engine::rules::{validate_play, FinishReason};
///
/// let board = Board::new();
/// assert!(validate_play(&board, Card::new(Suit::Red, Rank::One)).is_ok());
/// assert_eq!(
///     validate_play(&board, Card::new(Suit::Red, Rank::Two)),
///     Err(FinishReason::IllegalPlay)
/// );
/// ```
pub fn validate_play(board: &Board, card: Card) -> Result<(), FinishReason> {
    if board.can_play(card) {
        Ok(())
    } else {
        Err(FinishReason::IllegalPlay)
    }
}

/// Checks that a clue names exactly the positions of `hand` holding the
/// hinted property, in hand order.
///
/// The comparison is on ground truth and is order-sensitive: `[1, 0]` does
/// not match a hand whose matching positions are `[0, 1]`.
///
/// # Examples
///
/// ```
/// use hanabi_engine::cards::{Card, Rank, Suit};
/// use hanabi_engine::command::Hint;
/// use hanabi_engine::hand::Hand;
/// use hanabi_engine::rules::{validate_clue, FinishReason};
///
/// let hand = Hand::with_cards([
///     Card::new(Suit::Red, Rank::One),
///     Card::new(Suit::Blue, Rank::One),
///     Card::new(Suit::Red, Rank::Four),
/// ]);
/// assert!(validate_clue(&hand, Hint::Suit(Suit::Red), &[0, 2]).is_ok());
/// assert_eq!(
///     validate_clue(&hand, Hint::Rank(Rank::One), &[0]),
///     Err(FinishReason::FalseClue)
/// );
/// ```
pub fn validate_clue(hand: &Hand, hint: Hint, claimed: &[usize]) -> Result<(), FinishReason> {
    let actual = match hint {
        Hint::Suit(suit) => hand.positions_matching_suit(suit),
        Hint::Rank(rank) => hand.positions_matching_rank(rank),
    };
    if actual == claimed {
        Ok(())
    } else {
        Err(FinishReason::FalseClue)
    }
}
