//! Word-list source
//!
//! Supplies the candidate words for a session, either from a plain-text
//! file (one entry per line) or from the built-in country list. Entries
//! may contain spaces and any case; the session uppercases its pick.

use std::fs;
use std::path::Path;

use crate::models::errors::{GameError, GameResult};

/// Built-in word list used when no file is given.
pub const DEFAULT_WORDS: [&str; 30] = [
    "FRANCE",
    "ITALY",
    "SPAIN",
    "PORTUGAL",
    "GERMANY",
    "BELGIUM",
    "NETHERLANDS",
    "SWITZERLAND",
    "AUSTRIA",
    "GREECE",
    "NORWAY",
    "SWEDEN",
    "FINLAND",
    "ICELAND",
    "IRELAND",
    "SCOTLAND",
    "CANADA",
    "MEXICO",
    "BRAZIL",
    "ARGENTINA",
    "CHILE",
    "PERU",
    "JAPAN",
    "CHINA",
    "INDIA",
    "AUSTRALIA",
    "NEW ZEALAND",
    "SOUTH AFRICA",
    "COSTA RICA",
    "UNITED KINGDOM",
];

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|s| s.to_string()).collect()
}

/// Read a word list from `path`. Lines are trimmed and blank lines
/// skipped; yields `EmptyWordList` when nothing remains.
pub fn load_words(path: &Path) -> GameResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    Ok(words)
}
