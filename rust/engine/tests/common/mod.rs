#![allow(dead_code)]

use hanabi_engine::cards::{Card, Rank, Suit};
use hanabi_engine::command::Command;

/// Builds cards from space-separated tokens such as `"R1 G5 Y3"`.
pub fn cards(tokens: &str) -> Vec<Card> {
    tokens
        .split_whitespace()
        .map(|t| {
            let mut chars = t.chars();
            let suit = chars.next().and_then(Suit::from_letter).expect("suit letter");
            let rank = chars
                .next()
                .and_then(|c| c.to_digit(10))
                .and_then(|d| Rank::from_u8(d as u8))
                .expect("rank digit");
            Card::new(suit, rank)
        })
        .collect()
}

pub fn start(tokens: &str) -> Command {
    Command::StartGame {
        cards: cards(tokens),
    }
}

pub fn play(position: usize) -> Command {
    Command::Play { position }
}

pub fn drop_card(position: usize) -> Command {
    Command::Drop { position }
}

pub fn tell_suit(suit: Suit, positions: &[usize]) -> Command {
    Command::ClueSuit {
        suit,
        positions: positions.to_vec(),
    }
}

pub fn tell_rank(rank: Rank, positions: &[usize]) -> Command {
    Command::ClueRank {
        rank,
        positions: positions.to_vec(),
    }
}
