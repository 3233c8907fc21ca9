use crate::board::Board;
use crate::cards::{Card, Rank, Suit};
use crate::errors::GameError;
use crate::knowledge::HeldCard;

/// A player's cards in hand order.
///
/// Cards are addressed only by their current 0-based position; removing a
/// card shifts every later card down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<HeldCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().map(HeldCard::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[HeldCard] {
        &self.cards
    }

    pub fn get(&self, position: usize) -> Option<&HeldCard> {
        self.cards.get(position)
    }

    /// Appends a freshly drawn card; its holder knows nothing about it yet.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(HeldCard::new(card));
    }

    pub fn play_card(&mut self, position: usize) -> Result<HeldCard, GameError> {
        self.take(position)
    }

    pub fn drop_card(&mut self, position: usize) -> Result<HeldCard, GameError> {
        self.take(position)
    }

    fn take(&mut self, position: usize) -> Result<HeldCard, GameError> {
        if position >= self.cards.len() {
            return Err(GameError::IndexOutOfRange {
                position,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(position))
    }

    /// Positions whose true suit is `suit`. Used to check a clue, not by the holder.
    pub fn positions_matching_suit(&self, suit: Suit) -> Vec<usize> {
        self.positions_where(|c| c.suit == suit)
    }

    /// Positions whose true rank is `rank`. Used to check a clue, not by the holder.
    pub fn positions_matching_rank(&self, rank: Rank) -> Vec<usize> {
        self.positions_where(|c| c.rank == rank)
    }

    fn positions_where(&self, pred: impl Fn(Card) -> bool) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, held)| pred(held.card()))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn apply_hint_suit(&mut self, claimed: &[usize], suit: Suit) {
        for (i, held) in self.cards.iter_mut().enumerate() {
            if claimed.contains(&i) {
                held.restrict_to_suit(suit);
            } else {
                held.exclude_suit(suit);
            }
        }
    }

    pub fn apply_hint_rank(&mut self, claimed: &[usize], rank: Rank) {
        for (i, held) in self.cards.iter_mut().enumerate() {
            if claimed.contains(&i) {
                held.restrict_to_rank(rank);
            } else {
                held.exclude_rank(rank);
            }
        }
    }
}

/// A play is risky unless every card the holder could believe `card` to be
/// is playable on `board`. Evaluate before the card is added to the board.
pub fn is_risky(card: &HeldCard, board: &Board) -> bool {
    card.possible_cards().into_iter().any(|c| !board.can_play(c))
}
