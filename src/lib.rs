//! Letter Box
//!
//! A word-chaining puzzle on a square of twelve letters. Each side holds
//! three letters; words are spelled from the board without taking two
//! consecutive letters from the same side, and every word must start with
//! the last letter of the previous one. The goal is to use every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_box::core::{Board, BoardRules};
//! use letter_box::dictionary::{Verdict, WordListDictionary};
//! use letter_box::game::{GameSession, RulesConfig};
//!
//! let board = Board::parse("ATE-MPS-RON-CID", &BoardRules::default()).unwrap();
//! let mut game = GameSession::new(board, RulesConfig::default());
//! let dictionary = WordListDictionary::from_words(["moist"]);
//!
//! // Local rules run first; only then is the dictionary asked
//! let pending = game.begin_submission("moist").unwrap();
//! let verdict = if dictionary.contains(&pending.query()) {
//!     Verdict::Found
//! } else {
//!     Verdict::NotFound
//! };
//!
//! let accepted = game.complete_submission(pending.ticket(), verdict).unwrap();
//! assert_eq!(accepted.next_start, 'T');
//! ```

// Board letters and sides
pub mod core;

// Random board generation
pub mod generator;

// Word rules and game state
pub mod game;

// Dictionary lookups
pub mod dictionary;

// Configuration file
pub mod config;

// Log setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
