//! Hangman Game Engine
//!
//! A Rust implementation of the classic hangman word-guessing game.
//!
//! # Overview
//!
//! This library provides a complete engine for playing hangman. A secret
//! word is drawn at random from a word list, the player guesses letters
//! one at a time, and each wrong guess adds one piece to the gallows
//! drawing. The game ends when the word is fully revealed (a win) or the
//! gallows is complete after eleven wrong guesses (a loss).
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine and win/loss logic
//! - [`models`] - Domain models (WordSession, GallowsState, errors)
//! - [`services`] - Host-loop services (turn loop, letter prompt, word list)
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//!
//! # Example
//!
//! ```rust
//! use hangman::{GameEngine, GameState};
//!
//! let words = vec!["FRANCE".to_string()];
//! let mut engine = GameEngine::new(&words, 42).unwrap();
//! engine.guess('F').unwrap();
//! assert_eq!(engine.state(), GameState::Playing);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState, GuessReport};
pub use models::word::GuessResult;
