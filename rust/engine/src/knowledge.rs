//! What a player can infer about a card they hold but cannot see.
//!
//! Each held card carries two small bitsets, one over suits and one over
//! ranks. Both start full and only shrink in response to clues that the
//! engine has already checked against the ground truth.

use std::fmt;
use std::marker::PhantomData;

use crate::cards::{Card, Rank, Suit};

/// A closed enumeration that can be tracked in a [`Possible`] set.
pub trait Attribute: Copy + Eq + 'static {
    /// Every value of the domain, in canonical order.
    const DOMAIN: &'static [Self];

    fn bit(self) -> u8;
}

impl Attribute for Suit {
    const DOMAIN: &'static [Self] = &Suit::ALL;

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl Attribute for Rank {
    const DOMAIN: &'static [Self] = &Rank::ALL;

    fn bit(self) -> u8 {
        1 << (self.value() - 1)
    }
}

/// Bitset of the values a card could still have for one attribute.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Possible<A: Attribute> {
    mask: u8,
    _attr: PhantomData<A>,
}

impl<A: Attribute> Possible<A> {
    pub fn full() -> Self {
        let mask = A::DOMAIN.iter().fold(0, |m, a| m | a.bit());
        Self::from_mask(mask)
    }

    pub fn only(value: A) -> Self {
        Self::from_mask(value.bit())
    }

    fn from_mask(mask: u8) -> Self {
        Self {
            mask,
            _attr: PhantomData,
        }
    }

    pub fn contains(&self, value: A) -> bool {
        self.mask & value.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn is_singleton(&self) -> bool {
        self.len() == 1
    }

    /// Removes `value` from the set.
    ///
    /// Emptying the set means a clue was applied without being checked
    /// against the ground truth. Debug builds panic; release builds keep the
    /// last value.
    pub fn remove(&mut self, value: A) {
        let remaining = self.mask & !value.bit();
        debug_assert!(remaining != 0, "knowledge set would become empty");
        if remaining != 0 {
            self.mask = remaining;
        }
    }

    pub fn iter(self) -> impl Iterator<Item = A> {
        A::DOMAIN.iter().copied().filter(move |a| self.contains(*a))
    }
}

impl<A: Attribute + fmt::Debug> fmt::Debug for Possible<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A card sitting in a player's hand together with its holder's knowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldCard {
    card: Card,
    possible_suits: Possible<Suit>,
    possible_ranks: Possible<Rank>,
}

impl HeldCard {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            possible_suits: Possible::full(),
            possible_ranks: Possible::full(),
        }
    }

    /// Ground truth. Only the engine looks at this, never the holder.
    pub fn card(&self) -> Card {
        self.card
    }

    pub fn possible_suits(&self) -> Possible<Suit> {
        self.possible_suits
    }

    pub fn possible_ranks(&self) -> Possible<Rank> {
        self.possible_ranks
    }

    pub fn is_known_suit(&self) -> bool {
        self.possible_suits.is_singleton()
    }

    pub fn is_known_rank(&self) -> bool {
        self.possible_ranks.is_singleton()
    }

    pub fn is_known(&self) -> bool {
        self.is_known_suit() && self.is_known_rank()
    }

    pub fn restrict_to_suit(&mut self, suit: Suit) {
        if self.is_known_suit() {
            return;
        }
        self.possible_suits = Possible::only(suit);
    }

    pub fn exclude_suit(&mut self, suit: Suit) {
        self.possible_suits.remove(suit);
    }

    pub fn restrict_to_rank(&mut self, rank: Rank) {
        if self.is_known_rank() {
            return;
        }
        self.possible_ranks = Possible::only(rank);
    }

    pub fn exclude_rank(&mut self, rank: Rank) {
        self.possible_ranks.remove(rank);
    }

    /// Every identity consistent with the holder's knowledge, suit-major.
    pub fn possible_cards(&self) -> Vec<Card> {
        let ranks = self.possible_ranks;
        self.possible_suits
            .iter()
            .flat_map(move |s| ranks.iter().map(move |r| Card::new(s, r)))
            .collect()
    }
}
