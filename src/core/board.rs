//! The four-sided letter board
//!
//! A `Board` is immutable once built. The letter → side lookup is computed
//! once at construction and answers membership queries in constant time.

use super::letters::{Side, count_vowels};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shape and vowel constraints every board must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRules {
    pub per_side: usize,
    pub min_total_vowels: usize,
    pub max_vowels_per_side: usize,
}

impl BoardRules {
    /// Total number of letters on a board with these rules
    #[inline]
    #[must_use]
    pub const fn total_letters(&self) -> usize {
        self.per_side * Side::ALL.len()
    }
}

impl Default for BoardRules {
    fn default() -> Self {
        Self {
            per_side: 3,
            min_total_vowels: 3,
            max_vowels_per_side: 2,
        }
    }
}

/// Why a set of letters cannot be used as a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected four sides separated by '-', ',', '/' or spaces, got {0:?}")]
    Malformed(String),
    #[error("{side} side must have {expected} letters, got {found}")]
    WrongSideLength {
        side: Side,
        expected: usize,
        found: usize,
    },
    #[error("{side} side contains non-letter character {character:?}")]
    NonAlphabetic { side: Side, character: char },
    #[error("letter {0} appears more than once")]
    DuplicateLetter(char),
    #[error("board needs at least {min} vowels, got {found}")]
    TooFewVowels { found: usize, min: usize },
    #[error("{side} side has {found} vowels, at most {max} allowed")]
    TooManyVowelsOnSide { side: Side, found: usize, max: usize },
}

/// A board of four sides, each holding `per_side` unique letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    sides: [Vec<char>; 4],
    lookup: FxHashMap<char, Side>,
}

impl Board {
    /// Validate externally supplied sides (`top`, `left`, `right`, `bottom`)
    ///
    /// Each side is trimmed and upper-cased before checking.
    ///
    /// # Errors
    /// Returns the first `BoardError` found, checking side lengths and
    /// characters first, then uniqueness, then the vowel bounds.
    ///
    /// # Examples
    /// ```
    /// use letter_box::core::{Board, BoardRules, Side};
    ///
    /// let board = Board::from_sides(["ate", "mps", "ron", "cid"], &BoardRules::default()).unwrap();
    /// assert_eq!(board.side_of('O'), Some(Side::Right));
    /// assert!(Board::from_sides(["ate", "mps", "ron", "cd"], &BoardRules::default()).is_err());
    /// ```
    pub fn from_sides(sides: [&str; 4], rules: &BoardRules) -> Result<Self, BoardError> {
        let mut groups: [Vec<char>; 4] = Default::default();

        for (side, (raw, group)) in Side::ALL.into_iter().zip(sides.iter().zip(&mut groups)) {
            let letters: Vec<char> = raw.trim().chars().map(|c| c.to_ascii_uppercase()).collect();

            if letters.len() != rules.per_side {
                return Err(BoardError::WrongSideLength {
                    side,
                    expected: rules.per_side,
                    found: letters.len(),
                });
            }

            if let Some(&character) = letters.iter().find(|c| !c.is_ascii_uppercase()) {
                return Err(BoardError::NonAlphabetic { side, character });
            }

            *group = letters;
        }

        Self::from_groups(groups, rules)
    }

    /// Parse a board written as `TOP-LEFT-RIGHT-BOTTOM`
    ///
    /// Sides may be separated by `-`, `,`, `/` or whitespace.
    ///
    /// # Errors
    /// Returns `BoardError::Malformed` unless exactly four sides are present,
    /// otherwise anything [`Board::from_sides`] reports.
    pub fn parse(text: &str, rules: &BoardRules) -> Result<Self, BoardError> {
        let parts: Vec<&str> = text
            .split(|c: char| c == '-' || c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let sides: [&str; 4] = parts
            .try_into()
            .map_err(|_| BoardError::Malformed(text.to_string()))?;

        Self::from_sides(sides, rules)
    }

    /// Check uniqueness and vowel bounds of already-normalised groups
    fn from_groups(groups: [Vec<char>; 4], rules: &BoardRules) -> Result<Self, BoardError> {
        let mut lookup = FxHashMap::default();
        for (side, group) in Side::ALL.into_iter().zip(&groups) {
            for &letter in group {
                if lookup.insert(letter, side).is_some() {
                    return Err(BoardError::DuplicateLetter(letter));
                }
            }
        }

        let total = groups.iter().map(count_vowels).sum::<usize>();
        if total < rules.min_total_vowels {
            return Err(BoardError::TooFewVowels {
                found: total,
                min: rules.min_total_vowels,
            });
        }

        for (side, group) in Side::ALL.into_iter().zip(&groups) {
            let found = count_vowels(group);
            if found > rules.max_vowels_per_side {
                return Err(BoardError::TooManyVowelsOnSide {
                    side,
                    found,
                    max: rules.max_vowels_per_side,
                });
            }
        }

        Ok(Self {
            sides: groups,
            lookup,
        })
    }

    /// Build a board from groups the generator has already checked
    pub(crate) fn from_checked_groups(groups: [Vec<char>; 4], rules: &BoardRules) -> Self {
        Self::from_groups(groups, rules)
            .unwrap_or_else(|e| unreachable!("generator produced an invalid board: {e}"))
    }

    /// Letters on one side, in order
    #[inline]
    #[must_use]
    pub fn side(&self, side: Side) -> &[char] {
        &self.sides[side.index()]
    }

    /// All four sides in `top, left, right, bottom` order
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> &[Vec<char>; 4] {
        &self.sides
    }

    /// Which side a letter sits on, if it is on the board
    #[inline]
    #[must_use]
    pub fn side_of(&self, letter: char) -> Option<Side> {
        self.lookup.get(&letter.to_ascii_uppercase()).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.side_of(letter).is_some()
    }

    /// Every letter on the board in side order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.sides.iter().flatten().copied()
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn per_side(&self) -> usize {
        self.sides[0].len()
    }

    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.sides.iter().map(count_vowels).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.sides.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            group.iter().try_for_each(|c| write!(f, "{c}"))?;
        }
        Ok(())
    }
}
