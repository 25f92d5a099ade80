//! Game services
//!
//! This module contains the host-loop logic: the turn loop, the
//! validated letter prompt, and the word-list source.

pub mod game;
pub mod input;
pub mod wordlist;
