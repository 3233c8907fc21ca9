use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::command::Command;
use crate::errors::GameError;
use crate::game::{GameState, GameStats, Step};
use crate::rules::{FinishReason, Rules};

/// Where the engine is in a game's lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// No game has been dealt yet
    Idle,
    /// A game is accepting gameplay commands
    Active,
    /// The last game ended; only a new deal is accepted
    Finished,
}

/// What the caller should do after a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    /// The game goes on
    Continue,
    /// This command ended the game; report its stats now
    Finish(FinishReason),
    /// The game had already ended, the command changed nothing
    Ignored,
}

/// Turn engine that replays parsed commands for one table of two players.
///
/// # Examples
///
/// ```
/// use hanabi_engine::cards::{Card, Rank, Suit};
/// use hanabi_engine::command::Command;
/// use hanabi_engine::engine::{Engine, Verdict};
/// use hanabi_engine::rules::{FinishReason, Rules};
///
/// let mut cards: Vec<Card> = Rank::ALL.iter().map(|&r| Card::new(Suit::Red, r)).collect();
/// cards.extend(Rank::ALL.iter().map(|&r| Card::new(Suit::Green, r)));
/// cards.push(Card::new(Suit::Red, Rank::One));
/// cards.push(Card::new(Suit::Red, Rank::Two));
///
/// let mut engine = Engine::new(Rules::default());
/// engine.execute(Command::StartGame { cards }).unwrap();
/// assert_eq!(engine.execute(Command::Play { position: 0 }).unwrap(), Verdict::Continue);
///
/// // player 1 plays G2 onto an empty green pile
/// let verdict = engine.execute(Command::Play { position: 1 }).unwrap();
/// assert_eq!(verdict, Verdict::Finish(FinishReason::IllegalPlay));
/// assert_eq!(engine.stats().unwrap().to_string(), "Turn: 2, cards: 1, with risk: 1");
/// ```
#[derive(Debug)]
pub struct Engine {
    rules: Rules,
    phase: Phase,
    /// Current or most recently finished game
    game: Option<GameState>,
    games_started: u32,
}

impl Engine {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            phase: Phase::Idle,
            game: None,
            games_started: 0,
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Counters of the current or most recently finished game.
    pub fn stats(&self) -> Option<GameStats> {
        self.game.as_ref().map(GameState::stats)
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotEnoughCards`] when a deal is too short; the previous
    ///   state is kept.
    /// - [`GameError::NoGameInProgress`] for a gameplay command before any deal.
    /// - [`GameError::IndexOutOfRange`] for a position missing from the hand.
    ///   The game is over after this error, as if it had returned
    ///   `Finish(MalformedCommand)`.
    pub fn execute(&mut self, command: Command) -> Result<Verdict, GameError> {
        if let Command::StartGame { cards } = command {
            return self.start(cards);
        }
        match self.phase {
            Phase::Idle => Err(GameError::NoGameInProgress),
            Phase::Finished => {
                debug!(kind = ?command.kind(), "ignoring command after game end");
                Ok(Verdict::Ignored)
            }
            Phase::Active => self.step(command),
        }
    }

    fn start(&mut self, cards: Vec<Card>) -> Result<Verdict, GameError> {
        let game = GameState::deal(cards, self.rules)?;
        if self.phase == Phase::Active {
            if let Some(old) = &self.game {
                warn!(turn = old.turn(), "new deal replaces an unfinished game");
            }
        }
        self.games_started += 1;
        debug!(
            game = self.games_started,
            deck = game.deck().remaining(),
            "game dealt"
        );
        self.game = Some(game);
        self.phase = Phase::Active;
        Ok(Verdict::Continue)
    }

    fn step(&mut self, command: Command) -> Result<Verdict, GameError> {
        let Some(game) = self.game.as_mut() else {
            return Err(GameError::NoGameInProgress);
        };
        let player = game.active_player();
        let outcome = game.apply(&command);
        debug!(
            turn = game.turn(),
            player,
            kind = ?command.kind(),
            "command applied"
        );
        match outcome {
            Ok(Step::Continue) => Ok(Verdict::Continue),
            Ok(Step::Finish(reason)) => {
                self.finish(reason);
                Ok(Verdict::Finish(reason))
            }
            Err(e) => {
                self.finish(FinishReason::MalformedCommand);
                Err(e)
            }
        }
    }

    fn finish(&mut self, reason: FinishReason) {
        self.phase = Phase::Finished;
        if let Some(stats) = self.stats() {
            info!(
                ?reason,
                turn = stats.turn,
                cards = stats.board_depth,
                risks = stats.risk_count,
                "game finished"
            );
        }
    }
}
