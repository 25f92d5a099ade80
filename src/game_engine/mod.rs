//! Game state machine
//!
//! Ties the word session and the gallows counter together, latching the
//! terminal outcome and refusing guesses once the game has ended.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::constants::GallowsStage;
use crate::models::errors::{GameError, GameResult};
use crate::models::gallows::GallowsState;
use crate::models::word::{GuessResult, WordSession};

pub use crate::models::gallows::GameState;

/// Core game engine driving one hangman session.
pub struct GameEngine {
    word: WordSession,
    gallows: GallowsState,
    state: GameState,
}

/// What a single guess did: the hit/miss result, the gallows stage to
/// draw when it was a miss, and the state the game is in afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub result: GuessResult,
    pub stage: Option<GallowsStage>,
    pub state: GameState,
}

impl GameEngine {
    /// Start a new session from a word list and an RNG seed.
    ///
    /// # Arguments
    ///
    /// * `words` - Candidate words; one is picked uniformly at random
    /// * `seed` - Random number generator seed for the pick
    ///
    /// # Returns
    ///
    /// A new GameEngine in the Playing state, or `EmptyWordList` when
    /// there is nothing to pick from.
    pub fn new(words: &[String], seed: u64) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(GameEngine {
            word: WordSession::new(words, &mut rng)?,
            gallows: GallowsState::new(),
            state: GameState::Playing,
        })
    }

    /// Process one guessed letter.
    ///
    /// On a miss, the gallows counter advances and the report carries the
    /// stage to draw. Once the game is Won or Lost, further guesses fail
    /// with `GameAlreadyEnded` and mutate nothing.
    pub fn guess(&mut self, letter: char) -> GameResult<GuessReport> {
        if self.state != GameState::Playing {
            return Err(GameError::GameAlreadyEnded);
        }

        let result = self.word.apply_guess(letter)?;
        let stage = match result {
            GuessResult::Hit => None,
            GuessResult::Miss => GallowsStage::from_index(self.gallows.record_miss()?),
        };

        self.state = self.gallows.outcome(self.word.is_fully_revealed());
        Ok(GuessReport {
            result,
            stage,
            state: self.state,
        })
    }

    /// Checks for game over and updates the latched state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Won or Lost)
    /// * `None` if the game is still in progress
    ///
    /// A loss (the gallows complete) is checked before a win.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Playing {
            return Some(self.state);
        }

        self.state = self.gallows.outcome(self.word.is_fully_revealed());
        match self.state {
            GameState::Playing => None,
            ended => Some(ended),
        }
    }

    pub fn word(&self) -> &WordSession {
        &self.word
    }

    pub fn gallows(&self) -> &GallowsState {
        &self.gallows
    }

    pub fn state(&self) -> GameState {
        self.state
    }
}
