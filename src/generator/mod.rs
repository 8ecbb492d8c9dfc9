//! Random board generation
//!
//! Generation runs two bounded retry loops. The selection phase draws a set of
//! distinct letters with enough vowels; the assignment phase shuffles that set
//! across the four sides until no side is vowel-heavy. Either loop running out
//! of attempts is an error, never a silently invalid board.

mod assignment;
mod config;
mod selection;

pub use config::GeneratorConfig;

use crate::core::{Board, Side};
use assignment::assign_sides;
use rand::Rng;
use selection::select_letters;
use thiserror::Error;

/// Why generation gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("letter pool has {available} distinct letters, board needs {required}")]
    PoolTooSmall { available: usize, required: usize },
    #[error("invalid generator config: {0}")]
    InvalidConfig(&'static str),
    #[error("no letter draw with at least {min_vowels} vowels after {attempts} attempts")]
    SelectionExhausted { attempts: usize, min_vowels: usize },
    #[error(
        "could not spread vowels at most {max_vowels_per_side} per side after {attempts} attempts"
    )]
    AssignmentExhausted {
        attempts: usize,
        max_vowels_per_side: usize,
    },
}

/// A generated board plus how hard it was to find
#[derive(Debug, Clone)]
pub struct Generated {
    pub board: Board,
    pub selection_attempts: usize,
    pub assignment_attempts: usize,
}

/// Builds random boards from a [`GeneratorConfig`]
#[derive(Debug, Clone, Default)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

impl BoardGenerator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a board satisfying every constraint of the config
    ///
    /// # Errors
    /// Returns `GenerationError` if the config cannot describe a board or if
    /// either phase exhausts `max_attempts`.
    ///
    /// # Examples
    /// ```
    /// use letter_box::generator::BoardGenerator;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let generated = BoardGenerator::default().generate(&mut rng).unwrap();
    /// assert_eq!(generated.board.letter_count(), 12);
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Generated, GenerationError> {
        let config = &self.config;
        let rules = config.board_rules();
        let required = config.required_letters();

        if config.per_side == 0 {
            return Err(GenerationError::InvalidConfig("per_side must be at least 1"));
        }

        let available = config.pool.distinct_count();
        if available < required {
            return Err(GenerationError::PoolTooSmall {
                available,
                required,
            });
        }

        let max_vowels = config.max_vowels_per_side * Side::ALL.len();
        let (letters, selection_attempts) = select_letters(
            &config.pool,
            required,
            config.min_total_vowels,
            max_vowels,
            config.max_attempts,
            rng,
        )?;

        let (groups, assignment_attempts) = assign_sides(
            letters,
            config.per_side,
            config.max_vowels_per_side,
            config.max_attempts,
            rng,
        )?;

        let board = Board::from_checked_groups(groups, &rules);
        tracing::debug!(
            %board,
            selection_attempts,
            assignment_attempts,
            "generated board"
        );

        Ok(Generated {
            board,
            selection_attempts,
            assignment_attempts,
        })
    }
}

/// Generate a board with the given config, discarding attempt counts
///
/// # Errors
/// See [`BoardGenerator::generate`].
pub fn generate_board<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Board, GenerationError> {
    BoardGenerator::new(config.clone())
        .generate(rng)
        .map(|generated| generated.board)
}
