use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Board;
use crate::cards::Card;
use crate::command::{Command, Hint};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{is_risky, Hand};
use crate::rules::{validate_clue, validate_play, FinishReason, Rules, PLAYERS};

/// Outcome of applying one gameplay command to a running game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    Continue,
    Finish(FinishReason),
}

/// Counters reported when a game ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Gameplay commands applied since the deal, including the last one
    pub turn: u32,
    /// Cards on the board
    pub board_depth: u32,
    /// Plays made without knowing the card was playable
    pub risk_count: u32,
    pub score: u32,
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}, cards: {}, with risk: {}",
            self.turn, self.board_depth, self.risk_count
        )
    }
}

/// Everything that changes during one game.
///
/// The active player takes every gameplay command. A clue targets the other
/// player. After each command the turn passes to the other player, so a clue
/// consumes the giver's turn and its target acts next.
#[derive(Debug, Clone)]
pub struct GameState {
    rules: Rules,
    board: Board,
    deck: Deck,
    hands: [Hand; PLAYERS],
    active: usize,
    turn: u32,
    risks: u32,
}

impl GameState {
    /// Deals `cards` in order: one hand to each player, the remainder to the deck.
    pub fn deal(cards: Vec<Card>, rules: Rules) -> Result<Self, GameError> {
        let needed = rules.cards_to_deal().ok_or(GameError::NotEnoughCards {
            needed: usize::MAX,
            got: cards.len(),
        })?;
        if cards.len() < needed {
            return Err(GameError::NotEnoughCards {
                needed,
                got: cards.len(),
            });
        }
        let first = Hand::with_cards(cards[..rules.hand_size].iter().copied());
        let second = Hand::with_cards(cards[rules.hand_size..needed].iter().copied());
        let deck = Deck::from_cards(cards[needed..].to_vec());
        Ok(Self {
            rules,
            board: Board::new(),
            deck,
            hands: [first, second],
            active: 0,
            turn: 0,
            risks: 0,
        })
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn hands(&self) -> &[Hand; PLAYERS] {
        &self.hands
    }
    pub fn active_player(&self) -> usize {
        self.active
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }
    pub fn risks(&self) -> u32 {
        self.risks
    }

    pub fn other_player(&self) -> usize {
        (self.active + 1) % PLAYERS
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            turn: self.turn,
            board_depth: self.board.depth(),
            risk_count: self.risks,
            score: self.board.score(),
        }
    }

    /// Applies one gameplay command for the active player.
    ///
    /// The turn counter and the active player advance even when the command
    /// fails, since a malformed command still ends the game on that turn.
    ///
    /// # Errors
    ///
    /// `StartGame` is not a gameplay command: it returns
    /// [`GameError::NotGameplay`] and leaves the state untouched. Dealing goes
    /// through [`GameState::deal`].
    pub fn apply(&mut self, command: &Command) -> Result<Step, GameError> {
        let result = match command {
            Command::StartGame { .. } => return Err(GameError::NotGameplay),
            Command::Play { position } => self.play(*position),
            Command::Drop { position } => self.drop_card(*position),
            Command::ClueSuit { suit, positions } => Ok(self.clue(Hint::Suit(*suit), positions)),
            Command::ClueRank { rank, positions } => Ok(self.clue(Hint::Rank(*rank), positions)),
        };
        self.turn += 1;
        self.active = self.other_player();
        result
    }

    fn play(&mut self, position: usize) -> Result<Step, GameError> {
        let held = self.hands[self.active].play_card(position)?;
        let card = held.card();
        if let Err(reason) = validate_play(&self.board, card) {
            return Ok(Step::Finish(reason));
        }
        if is_risky(&held, &self.board) {
            self.risks += 1;
        }
        self.board.add_card(card);
        if let Some(next) = self.deck.draw() {
            self.hands[self.active].add_card(next);
        }
        if self.board.is_full() {
            return Ok(Step::Finish(FinishReason::BoardComplete));
        }
        if self.deck.is_empty() {
            return Ok(Step::Finish(FinishReason::DeckExhausted));
        }
        Ok(Step::Continue)
    }

    fn drop_card(&mut self, position: usize) -> Result<Step, GameError> {
        self.hands[self.active].drop_card(position)?;
        if self.deck.remaining() < self.rules.drop_reserve {
            return Ok(Step::Finish(FinishReason::DeckExhausted));
        }
        if let Some(next) = self.deck.draw() {
            self.hands[self.active].add_card(next);
        }
        Ok(Step::Continue)
    }

    fn clue(&mut self, hint: Hint, claimed: &[usize]) -> Step {
        let target = self.other_player();
        let hand = &mut self.hands[target];
        if let Err(reason) = validate_clue(hand, hint, claimed) {
            return Step::Finish(reason);
        }
        match hint {
            Hint::Suit(suit) => hand.apply_hint_suit(claimed, suit),
            Hint::Rank(rank) => hand.apply_hint_rank(claimed, rank),
        }
        Step::Continue
    }
}
