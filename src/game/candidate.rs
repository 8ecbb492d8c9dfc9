//! The word being built letter by letter

use std::fmt;

/// Letters chosen so far for the next word
///
/// A seeded candidate starts with the previous word's last letter, which
/// cannot be deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateWord {
    letters: Vec<char>,
    seeded: bool,
}

impl CandidateWord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seeded(letter: char) -> Self {
        Self {
            letters: vec![letter],
            seeded: true,
        }
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    /// The locked first letter, if any
    #[must_use]
    pub fn seed(&self) -> Option<char> {
        if self.seeded {
            self.letters.first().copied()
        } else {
            None
        }
    }

    /// No letters chosen beyond the seed
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.letters.len() <= usize::from(self.seeded)
    }

    pub(crate) fn push(&mut self, letter: char) {
        self.letters.push(letter);
    }

    /// Remove the last chosen letter, never the seed
    pub(crate) fn pop(&mut self) -> Option<char> {
        if self.is_pristine() {
            None
        } else {
            self.letters.pop()
        }
    }

    pub(crate) fn reset(&mut self, seed: Option<char>) {
        *self = seed.map_or_else(Self::new, Self::seeded);
    }
}

impl fmt::Display for CandidateWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate() {
        let mut candidate = CandidateWord::new();
        assert!(candidate.is_pristine());
        assert_eq!(candidate.seed(), None);
        assert_eq!(candidate.pop(), None);
    }

    #[test]
    fn seed_cannot_be_removed() {
        let mut candidate = CandidateWord::seeded('T');
        candidate.push('R');

        assert_eq!(candidate.to_string(), "TR");
        assert!(!candidate.is_pristine());
        assert_eq!(candidate.pop(), Some('R'));
        assert_eq!(candidate.pop(), None);
        assert_eq!(candidate.to_string(), "T");
    }

    #[test]
    fn unseeded_letters_can_all_be_removed() {
        let mut candidate = CandidateWord::new();
        candidate.push('M');
        candidate.push('O');

        assert_eq!(candidate.pop(), Some('O'));
        assert_eq!(candidate.pop(), Some('M'));
        assert!(candidate.is_empty());
    }

    #[test]
    fn reset_with_and_without_seed() {
        let mut candidate = CandidateWord::new();
        candidate.push('M');

        candidate.reset(Some('T'));
        assert_eq!(candidate, CandidateWord::seeded('T'));

        candidate.reset(None);
        assert_eq!(candidate, CandidateWord::new());
    }
}
