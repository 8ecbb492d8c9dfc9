//! Board generation settings

use crate::core::{BoardRules, LetterPool};
use serde::Deserialize;

/// Settings for [`super::BoardGenerator`]
///
/// Deserializes from the `[generator]` table of a config file; every field
/// falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Letters to draw from (repeats add weight)
    pub pool: LetterPool,
    pub per_side: usize,
    pub min_total_vowels: usize,
    pub max_vowels_per_side: usize,
    /// Retry budget for each phase
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// The board constraints implied by this config
    #[must_use]
    pub const fn board_rules(&self) -> BoardRules {
        BoardRules {
            per_side: self.per_side,
            min_total_vowels: self.min_total_vowels,
            max_vowels_per_side: self.max_vowels_per_side,
        }
    }

    /// Letters needed for a full board (four sides)
    #[must_use]
    pub const fn required_letters(&self) -> usize {
        self.board_rules().total_letters()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let rules = BoardRules::default();
        Self {
            pool: LetterPool::default(),
            per_side: rules.per_side,
            min_total_vowels: rules.min_total_vowels,
            max_vowels_per_side: rules.max_vowels_per_side,
            max_attempts: 200,
        }
    }
}
