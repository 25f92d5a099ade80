//! Letter prompt
//!
//! Turns raw input lines into a single validated alphabetic letter,
//! re-prompting on anything else. Cancellation (closed input, or the
//! `quit`/`exit` commands, which are multi-character and so can never
//! collide with a guess) is confirmed before it ends the session.

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;

/// A validated prompt result: a letter to guess, or the player quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterInput {
    Letter(char),
    Cancelled,
}

/// Prompt until the player enters a single letter or quits.
/// The letter comes back uppercased.
pub fn ask_letter(
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<LetterInput> {
    loop {
        let line = match input.read_line("GUESS A LETTER:")? {
            Some(line) => line,
            None => {
                // stdin closed mid-game
                if confirm_quit(input)? {
                    return Ok(LetterInput::Cancelled);
                }
                continue;
            }
        };

        let entry = line.trim();
        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            if confirm_quit(input)? {
                return Ok(LetterInput::Cancelled);
            }
            continue;
        }

        let mut chars = entry.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                return Ok(LetterInput::Letter(c.to_ascii_uppercase()));
            }
            _ => output.writeln("THAT'S NOT A SINGLE LETTER, TRY AGAIN"),
        }
    }
}

/// Quit-confirmation. Closed input counts as a yes, since there is no
/// way left to ask again.
fn confirm_quit(input: &mut dyn InputReader) -> GameResult<bool> {
    match input.read_line("QUIT THE GAME? (Y/N)")? {
        None => Ok(true),
        Some(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
    }
}
