//! Word rules and rejection reasons
//!
//! Checks run in a fixed order and stop at the first failure, so the same
//! word against the same state always produces the same rejection.

use super::GameState;
use crate::core::{Board, Side};
use serde::Deserialize;
use thiserror::Error;

/// Rule toggles shared by every game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub min_word_length: usize,
    /// When false, a letter used by an earlier word cannot appear again
    /// (the chained first letter excepted)
    pub allow_letter_reuse: bool,
    /// When false, words built letter by letter skip the side re-check on
    /// submission; typed words are always fully checked
    pub require_full_chain_validation: bool,
    /// Start the next candidate with the last letter of the accepted word
    pub seed_next_word: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            allow_letter_reuse: true,
            require_full_chain_validation: true,
            seed_next_word: true,
        }
    }
}

/// Why a word (or a single letter) was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("word has {length} letters, minimum is {min}")]
    TooShort { length: usize, min: usize },
    #[error("{0:?} is not a letter")]
    InvalidCharacter(char),
    #[error("word must start with {expected}, not {found}")]
    WrongStart { expected: char, found: char },
    #[error("{0} is not on the board")]
    LetterNotOnBoard(char),
    #[error("{first} and {second} are both on the {side} side")]
    SameSideAdjacent { first: char, second: char, side: Side },
    #[error("{0} has already been played")]
    DuplicateWord(String),
    #[error("{0} was already used in an earlier word")]
    LetterAlreadyUsed(char),
    #[error("{0} is not in the dictionary")]
    NotFound(String),
    #[error("dictionary unavailable: {0}")]
    OracleUnavailable(String),
    #[error("another word is still being checked")]
    SubmissionPending,
    #[error("dictionary answer no longer matches the current word")]
    StaleVerdict,
}

/// Field-less mirror of [`Rejection`] for matching and counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    TooShort,
    InvalidCharacter,
    WrongStart,
    LetterNotOnBoard,
    SameSideAdjacent,
    DuplicateWord,
    LetterAlreadyUsed,
    NotFound,
    OracleUnavailable,
    SubmissionPending,
    StaleVerdict,
}

impl Rejection {
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::TooShort { .. } => RejectionKind::TooShort,
            Self::InvalidCharacter(_) => RejectionKind::InvalidCharacter,
            Self::WrongStart { .. } => RejectionKind::WrongStart,
            Self::LetterNotOnBoard(_) => RejectionKind::LetterNotOnBoard,
            Self::SameSideAdjacent { .. } => RejectionKind::SameSideAdjacent,
            Self::DuplicateWord(_) => RejectionKind::DuplicateWord,
            Self::LetterAlreadyUsed(_) => RejectionKind::LetterAlreadyUsed,
            Self::NotFound(_) => RejectionKind::NotFound,
            Self::OracleUnavailable(_) => RejectionKind::OracleUnavailable,
            Self::SubmissionPending => RejectionKind::SubmissionPending,
            Self::StaleVerdict => RejectionKind::StaleVerdict,
        }
    }

    /// Letters a UI should highlight for this rejection
    #[must_use]
    pub fn offending_letters(&self) -> Vec<char> {
        match *self {
            Self::InvalidCharacter(c) | Self::LetterNotOnBoard(c) | Self::LetterAlreadyUsed(c) => {
                vec![c]
            }
            Self::WrongStart { found, .. } => vec![found],
            Self::SameSideAdjacent { first, second, .. } => vec![first, second],
            _ => Vec::new(),
        }
    }

    /// Whether resubmitting the same word later could succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::OracleUnavailable(_) | Self::SubmissionPending)
    }
}

/// Trim and upper-case a submitted word
///
/// Only ASCII letters change case; anything else is left for the character
/// rule to reject.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// Run every local rule against an already-normalised word
///
/// `check_sides` disables the side-adjacency rule for words whose letters were
/// already checked one at a time.
///
/// # Errors
/// Returns the first [`Rejection`] in rule order: length, characters,
/// starting letter, board membership, side adjacency, duplicates, letter reuse.
pub fn check_word(
    word: &str,
    board: &Board,
    state: &GameState,
    rules: &RulesConfig,
    check_sides: bool,
) -> Result<(), Rejection> {
    let letters: Vec<char> = word.chars().collect();

    if letters.len() < rules.min_word_length {
        return Err(Rejection::TooShort {
            length: letters.len(),
            min: rules.min_word_length,
        });
    }

    if let Some(&c) = letters.iter().find(|c| !c.is_ascii_uppercase()) {
        return Err(Rejection::InvalidCharacter(c));
    }

    if let (Some(expected), Some(&found)) = (state.required_start(), letters.first())
        && found != expected
    {
        return Err(Rejection::WrongStart { expected, found });
    }

    let sides = letters
        .iter()
        .map(|&c| board.side_of(c).ok_or(Rejection::LetterNotOnBoard(c)))
        .collect::<Result<Vec<Side>, _>>()?;

    if check_sides {
        check_adjacent_sides(&letters, &sides)?;
    }

    if state.has_used_word(word) {
        return Err(Rejection::DuplicateWord(word.to_string()));
    }

    if !rules.allow_letter_reuse {
        check_letter_reuse(&letters, state)?;
    }

    Ok(())
}

fn check_adjacent_sides(letters: &[char], sides: &[Side]) -> Result<(), Rejection> {
    for (pair, side_pair) in letters.windows(2).zip(sides.windows(2)) {
        if side_pair[0] == side_pair[1] {
            return Err(Rejection::SameSideAdjacent {
                first: pair[0],
                second: pair[1],
                side: side_pair[0],
            });
        }
    }
    Ok(())
}

fn check_letter_reuse(letters: &[char], state: &GameState) -> Result<(), Rejection> {
    let chained = state.required_start().is_some();

    for (i, &c) in letters.iter().enumerate() {
        if i == 0 && chained {
            continue;
        }
        if state.has_used_letter(c) {
            return Err(Rejection::LetterAlreadyUsed(c));
        }
    }
    Ok(())
}
