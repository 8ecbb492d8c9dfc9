//! Core domain types for the letter box puzzle
//!
//! Letters, sides, letter pools and the immutable `Board`. Nothing here knows
//! about game progress or dictionaries.

mod board;
mod letters;

pub use board::{Board, BoardError, BoardRules};
pub use letters::{DEFAULT_POOL, LetterPool, PoolError, Side, VOWELS, count_vowels, is_vowel};
