//! Progress on the current board

use crate::core::Board;
use std::collections::BTreeSet;

/// Accepted words, the chaining constraint and the letters used so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    used_words: Vec<String>,
    required_start: Option<char>,
    used_letters: BTreeSet<char>,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted words in play order
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// The letter the next word must start with, `None` before the first word
    #[must_use]
    pub const fn required_start(&self) -> Option<char> {
        self.required_start
    }

    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[must_use]
    pub fn has_used_word(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn has_used_letter(&self, letter: char) -> bool {
        self.used_letters.contains(&letter)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Board letters not yet used by any accepted word, in board order
    #[must_use]
    pub fn unused_letters(&self, board: &Board) -> Vec<char> {
        board
            .letters()
            .filter(|c| !self.used_letters.contains(c))
            .collect()
    }

    /// Every letter on the board has appeared in an accepted word
    #[must_use]
    pub fn is_complete(&self, board: &Board) -> bool {
        board.letters().all(|c| self.used_letters.contains(&c))
    }

    /// Commit an accepted word; callers have already validated it
    pub(crate) fn record(&mut self, word: String) {
        self.required_start = word.chars().last();
        self.used_letters.extend(word.chars());
        self.used_words.push(word);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
