use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::MAX_STAGES;
use crate::models::errors::GameResult;
use crate::models::word::GuessResult;
use crate::services::input::{self, LetterInput};
use crate::ui::presenters::{GallowsPresenter, OutcomePresenter, WordPresenter};

/// One hangman session: the engine plus the turn loop driving it.
pub struct Game {
    engine: GameEngine,
}

impl Game {
    pub fn new(words: &[String], seed: u64) -> GameResult<Self> {
        Ok(Game {
            engine: GameEngine::new(words, seed)?,
        })
    }

    /// Run the session to completion.
    ///
    /// Returns the terminal state, or `None` if the player quit before
    /// the game was decided. Exactly one guess is processed per turn;
    /// the only suspension point is the blocking prompt.
    pub fn run(
        &mut self,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<Option<GameState>> {
        self.print_briefing(output);
        WordPresenter::show(&self.engine.word().display(), output);

        loop {
            let letter = match input::ask_letter(input, output)? {
                LetterInput::Letter(letter) => letter,
                LetterInput::Cancelled => {
                    output.writeln("GOODBYE.");
                    return Ok(None);
                }
            };

            let report = self.engine.guess(letter)?;
            match report.result {
                GuessResult::Hit => {
                    WordPresenter::show(&self.engine.word().display(), output);
                }
                GuessResult::Miss => {
                    if let Some(stage) = report.stage {
                        GallowsPresenter::show_stage(stage, output);
                    }
                    WordPresenter::show_guessed(self.engine.word().guessed(), output);
                }
            }

            match self.engine.check_game_over() {
                Some(GameState::Won) => {
                    OutcomePresenter::show_win(output);
                    return Ok(Some(GameState::Won));
                }
                Some(GameState::Lost) => {
                    OutcomePresenter::show_loss(&self.engine.word().secret(), output);
                    return Ok(Some(GameState::Lost));
                }
                _ => {}
            }
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn print_briefing(&mut self, output: &mut dyn OutputWriter) {
        let length = self.engine.word().revealed().len();
        output.writeln(&format!(
            "GUESS THE WORD. IT HAS {} CHARACTERS. {} WRONG GUESSES BUILD THE GALLOWS.",
            length, MAX_STAGES,
        ));
    }
}
