use super::constants::MAX_STAGES;
use super::errors::{GameError, GameResult};

/// Overall state of a session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// The wrong-guess counter driving the gallows drawing.
///
/// The count moves from 0 to `MAX_STAGES` in steps of exactly 1, one
/// step per miss, and never comes back down.
pub struct GallowsState {
    wrong_count: u32,
}

impl Default for GallowsState {
    fn default() -> Self {
        Self::new()
    }
}

impl GallowsState {
    pub fn new() -> Self {
        GallowsState { wrong_count: 0 }
    }

    /// Record one miss and return the new count, which is also the index
    /// of the gallows stage to draw (1..=MAX_STAGES).
    ///
    /// A miss recorded after the count has already reached `MAX_STAGES`
    /// is a host-loop defect and fails with `GameAlreadyEnded` instead
    /// of moving the counter.
    pub fn record_miss(&mut self) -> GameResult<u32> {
        if self.wrong_count >= MAX_STAGES {
            return Err(GameError::GameAlreadyEnded);
        }
        self.wrong_count += 1;
        Ok(self.wrong_count)
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_count >= MAX_STAGES
    }

    /// Derive the session state from the counter and the reveal state.
    /// A loss is checked before a win, so the tie-break is deterministic
    /// if both conditions ever held at once.
    pub fn outcome(&self, fully_revealed: bool) -> GameState {
        if self.is_lost() {
            GameState::Lost
        } else if fully_revealed {
            GameState::Won
        } else {
            GameState::Playing
        }
    }
}
