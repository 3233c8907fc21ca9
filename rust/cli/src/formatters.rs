//! Text renderings of cards, deals and replay totals.
//!
//! ## Example
//!
//! ```rust
//! use hanabi_engine::cards::{Card, Rank, Suit};
//! use hanabi_cli::formatters::format_start_line;
//!
//! let cards = [Card::new(Suit::Red, Rank::One), Card::new(Suit::White, Rank::Four)];
//! assert_eq!(format_start_line(&cards), "Start new game with deck R1 W4");
//! ```

use hanabi_engine::cards::Card;
use serde::Serialize;

/// Space-separated card tokens.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A start command that deals `cards` in order.
pub fn format_start_line(cards: &[Card]) -> String {
    format!("Start new game with deck {}", format_cards(cards))
}

/// Totals over every game that finished during one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayTotals {
    pub games: u32,
    pub cards: u32,
    pub risks: u32,
}

/// `Games: <finished>, cards: <total>, with risk: <total>`
pub fn format_totals(totals: &ReplayTotals) -> String {
    format!(
        "Games: {}, cards: {}, with risk: {}",
        totals.games, totals.cards, totals.risks
    )
}
