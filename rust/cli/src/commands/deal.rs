//! Deal command: prints a start command for a shuffled standard deck.

use crate::error::CliError;
use crate::formatters::format_start_line;
use hanabi_engine::deck::Deck;
use std::io::Write;
use tracing::debug;

/// Handle the deal command.
///
/// Shuffles the 50-card deck with `seed` (a random one when `None`) and writes
/// a single `Start new game with deck ...` line that `replay` accepts.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    debug!(seed, "dealing shuffled deck");
    let deck = Deck::shuffled_with_seed(seed);
    writeln!(out, "{}", format_start_line(deck.cards()))?;
    Ok(())
}
