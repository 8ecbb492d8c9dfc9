//! Letters, vowels, board sides and the letter pool
//!
//! Letters are always uppercase ASCII `A`-`Z`. Y counts as a consonant.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// The five vowels used by every vowel constraint
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Default pool: the alphabet without Q, X and Z
pub const DEFAULT_POOL: &str = "ABCDEFGHIJKLMNOPRSTUVWY";

/// Check whether a letter is a vowel (case-insensitive)
#[inline]
#[must_use]
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

/// Count the vowels in a sequence of letters
#[must_use]
pub fn count_vowels<'a, I>(letters: I) -> usize
where
    I: IntoIterator<Item = &'a char>,
{
    letters.into_iter().filter(|&&c| is_vowel(c)).count()
}

/// One of the four edges of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    /// All sides in board order
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Right, Self::Bottom];

    /// Position of this side in [`Side::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for invalid letter pools
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("letter pool is empty")]
    Empty,
    #[error("letter pool contains non-letter character {0:?}")]
    InvalidCharacter(char),
}

/// The letters a board is drawn from
///
/// A letter may appear more than once; the number of copies is its weight
/// when drawing. `"AABC"` makes `A` twice as likely to be picked first as `B`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Build a pool from a string of letters, upper-casing them
    ///
    /// Whitespace is ignored so pools can be written in groups.
    ///
    /// # Errors
    /// Returns `PoolError` if the pool is empty or contains a non-letter.
    ///
    /// # Examples
    /// ```
    /// use letter_box::core::LetterPool;
    ///
    /// let pool = LetterPool::new("aab cde").unwrap();
    /// assert_eq!(pool.len(), 6);
    /// assert_eq!(pool.distinct_count(), 5);
    /// assert_eq!(pool.weight('A'), 2);
    /// ```
    pub fn new(letters: &str) -> Result<Self, PoolError> {
        let mut pool = Vec::with_capacity(letters.len());
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            if !c.is_ascii_alphabetic() {
                return Err(PoolError::InvalidCharacter(c));
            }
            pool.push(c.to_ascii_uppercase());
        }

        if pool.is_empty() {
            return Err(PoolError::Empty);
        }

        Ok(Self { letters: pool })
    }

    /// All letters including repeated copies
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of copies of `letter` in the pool
    #[must_use]
    pub fn weight(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().filter(|&&c| c == letter).count()
    }

    /// Distinct letters, in first-seen order
    #[must_use]
    pub fn distinct(&self) -> Vec<char> {
        let mut seen = [false; 26];
        self.letters
            .iter()
            .copied()
            .filter(|&c| {
                let slot = &mut seen[(c as u8 - b'A') as usize];
                !std::mem::replace(slot, true)
            })
            .collect()
    }

    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct().len()
    }

    /// Number of distinct vowels available
    #[must_use]
    pub fn distinct_vowels(&self) -> usize {
        count_vowels(&self.distinct())
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self {
            letters: DEFAULT_POOL.chars().collect(),
        }
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl TryFrom<String> for LetterPool {
    type Error = PoolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl std::str::FromStr for LetterPool {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_case_insensitive() {
        assert!(is_vowel('A'));
        assert!(is_vowel('e'));
        assert!(!is_vowel('Y'));
        assert!(!is_vowel('b'));
    }

    #[test]
    fn count_vowels_mixed() {
        assert_eq!(count_vowels(&['A', 'T', 'E']), 2);
        assert_eq!(count_vowels(&['M', 'P', 'S']), 0);
        assert_eq!(count_vowels(&Vec::<char>::new()), 0);
    }

    #[test]
    fn side_indices_match_order() {
        for (i, side) in Side::ALL.iter().enumerate() {
            assert_eq!(side.index(), i);
        }
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn default_pool_has_no_rare_letters() {
        let pool = LetterPool::default();
        assert_eq!(pool.len(), 23);
        assert_eq!(pool.distinct_count(), 23);
        assert_eq!(pool.weight('Q'), 0);
        assert_eq!(pool.weight('X'), 0);
        assert_eq!(pool.weight('Z'), 0);
        assert_eq!(pool.distinct_vowels(), 5);
    }

    #[test]
    fn pool_uppercases_and_keeps_weights() {
        let pool = LetterPool::new("aaEe bc").unwrap();
        assert_eq!(pool.letters(), &['A', 'A', 'E', 'E', 'B', 'C']);
        assert_eq!(pool.distinct(), vec!['A', 'E', 'B', 'C']);
        assert_eq!(pool.weight('a'), 2);
    }

    #[test]
    fn pool_rejects_bad_input() {
        assert_eq!(LetterPool::new(""), Err(PoolError::Empty));
        assert_eq!(LetterPool::new("   "), Err(PoolError::Empty));
        assert_eq!(LetterPool::new("AB1"), Err(PoolError::InvalidCharacter('1')));
        assert_eq!(LetterPool::new("ÄB"), Err(PoolError::InvalidCharacter('Ä')));
    }

    #[test]
    fn pool_parses_from_str() {
        let pool: LetterPool = "xyz".parse().unwrap();
        assert_eq!(pool.to_string(), "XYZ");
    }
}
