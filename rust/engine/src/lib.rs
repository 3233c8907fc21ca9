//! # hanabi-engine: Turn Engine and Card Knowledge
//!
//! Replays a scripted two-player Hanabi game from already-parsed commands.
//! Applies each command to the deck, board and hands, checks that clues are
//! truthful, tracks what each player can infer about their own cards, and
//! decides when the game ends.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identity (Suit, Rank, Card) and the standard deck
//! - [`knowledge`] - Per-card bitsets of possible suits and ranks
//! - [`deck`] - Ordered draw pile, optionally shuffled from a seed
//! - [`board`] - Top rank per suit, playability and score
//! - [`hand`] - Position-addressed held cards, clue application, risk test
//! - [`command`] - Tagged-union command records
//! - [`rules`] - Table parameters, play and clue validation
//! - [`game`] - State of one game and its counters
//! - [`engine`] - Idle/Active/Finished lifecycle across many games
//! - [`logger`] - JSONL game summaries
//! - [`errors`] - Error types for malformed commands
//!
//! ## Quick Start
//!
//! ```rust
//! use hanabi_engine::cards::{Card, Rank, Suit};
//! use hanabi_engine::command::Command;
//! use hanabi_engine::engine::{Engine, Verdict};
//! use hanabi_engine::rules::Rules;
//!
//! let mut cards: Vec<Card> = Rank::ALL.iter().map(|&r| Card::new(Suit::Red, r)).collect();
//! cards.extend(Rank::ALL.iter().map(|&r| Card::new(Suit::Green, r)));
//! cards.extend([Card::new(Suit::Red, Rank::One), Card::new(Suit::Red, Rank::Two)]);
//!
//! let mut engine = Engine::new(Rules::default());
//! engine.execute(Command::StartGame { cards }).unwrap();
//! let verdict = engine.execute(Command::Play { position: 0 }).unwrap();
//! assert_eq!(verdict, Verdict::Continue);
//! assert_eq!(engine.stats().unwrap().board_depth, 1);
//! ```
//!
//! ## Clue Truthfulness
//!
//! A clue must name exactly the positions holding the hinted property:
//!
//! ```rust
//! use hanabi_engine::cards::{Card, Rank, Suit};
//! use hanabi_engine::command::Hint;
//! use hanabi_engine::hand::Hand;
//! use hanabi_engine::rules::validate_clue;
//!
//! let hand = Hand::with_cards([
//!     Card::new(Suit::Red, Rank::One),
//!     Card::new(Suit::Blue, Rank::Two),
//! ]);
//! assert!(validate_clue(&hand, Hint::Suit(Suit::Red), &[0]).is_ok());
//! assert!(validate_clue(&hand, Hint::Suit(Suit::Red), &[0, 1]).is_err());
//! ```

pub mod board;
pub mod cards;
pub mod command;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod knowledge;
pub mod logger;
pub mod rules;
