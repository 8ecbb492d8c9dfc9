//! Generate boards without playing them

use crate::generator::{BoardGenerator, Generated, GenerationError};
use rand::Rng;

/// Generate `count` boards in sequence from one RNG
///
/// # Errors
/// Stops at the first board the generator cannot build.
pub fn generate_boards<R: Rng + ?Sized>(
    generator: &BoardGenerator,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Generated>, GenerationError> {
    (0..count).map(|_| generator.generate(rng)).collect()
}
