use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::Rng;

use super::constants::BLANK;
use super::errors::{GameError, GameResult};

/// Outcome of a single letter guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Hit,
    Miss,
}

/// The secret word for one session and its per-position reveal state.
///
/// The secret is uppercased on construction and never changes afterwards.
/// It may contain spaces (phrases such as "NEW ZEALAND"); space positions
/// are pre-revealed separators and can never be guessed.
pub struct WordSession {
    secret: Vec<char>,
    revealed: Vec<char>,
    guessed: BTreeSet<char>,
}

impl WordSession {
    /// Pick a word uniformly at random from `words` and start a session.
    ///
    /// Every letter position starts as the blank marker; every space
    /// position starts as a space. Fails with `EmptyWordList` when there
    /// is nothing to pick from.
    pub fn new(words: &[String], rng: &mut StdRng) -> GameResult<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        let pick = rng.gen_range(0..words.len());
        let secret: Vec<char> = words[pick].to_uppercase().chars().collect();
        let revealed = secret
            .iter()
            .map(|&c| if c == ' ' { ' ' } else { BLANK })
            .collect();

        Ok(WordSession {
            secret,
            revealed,
            guessed: BTreeSet::new(),
        })
    }

    /// Apply one guessed letter.
    ///
    /// The letter is uppercased, then every matching position of the
    /// secret (zero, one, or many) is revealed in one update. Re-guessing
    /// an already-revealed letter is a no-op that still reports `Hit`.
    /// A miss mutates nothing but the guessed-letter record.
    ///
    /// The input collaborator validates before calling, but a
    /// non-alphabetic character is still rejected here with
    /// `InvalidLetter` rather than trusted.
    pub fn apply_guess(&mut self, letter: char) -> GameResult<GuessResult> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter.to_string()));
        }
        let letter = letter.to_ascii_uppercase();
        self.guessed.insert(letter);

        let mut hit = false;
        for (i, &c) in self.secret.iter().enumerate() {
            if c == letter {
                self.revealed[i] = c;
                hit = true;
            }
        }

        if hit {
            Ok(GuessResult::Hit)
        } else {
            Ok(GuessResult::Miss)
        }
    }

    /// True iff every position matches the secret. Space positions
    /// satisfy this from the start.
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == self.secret
    }

    /// Reveal string for display, e.g. `_ _ A _ C E`.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for (i, &c) in self.revealed.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    /// Every letter submitted so far, hits and misses alike.
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }
}
