use std::fmt;

/// Game-specific error types
#[derive(Debug)]
pub enum GameError {
    /// The word source produced no candidates
    EmptyWordList,
    /// A malformed guess reached the core despite input-layer validation
    InvalidLetter(String),
    /// A guess or miss was recorded after the game reached a terminal state
    GameAlreadyEnded,
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::EmptyWordList => write!(f, "Word list is empty"),
            GameError::InvalidLetter(entry) => {
                write!(f, "Not a single letter: {:?}", entry)
            }
            GameError::GameAlreadyEnded => write!(f, "Game has already ended"),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}
