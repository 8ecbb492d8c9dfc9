//! Selection phase: draw a vowel-sufficient set of distinct letters

use super::GenerationError;
use crate::core::{LetterPool, count_vowels};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `count` distinct letters from the pool
///
/// Shuffles the whole pool (copies included) and keeps first occurrences, so
/// each next distinct letter is picked in proportion to its weight.
pub(crate) fn draw_letters<R: Rng + ?Sized>(
    pool: &LetterPool,
    count: usize,
    rng: &mut R,
) -> Vec<char> {
    let mut shuffled = pool.letters().to_vec();
    shuffled.shuffle(rng);

    let mut seen = [false; 26];
    shuffled
        .into_iter()
        .filter(|&c| !std::mem::replace(&mut seen[(c as u8 - b'A') as usize], true))
        .take(count)
        .collect()
}

/// Repeat draws until one has enough vowels to satisfy the board
///
/// A draw with more vowels than four sides can hold is also retried. Returns
/// the letters and the number of draws it took.
pub(crate) fn select_letters<R: Rng + ?Sized>(
    pool: &LetterPool,
    count: usize,
    min_vowels: usize,
    max_vowels: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(Vec<char>, usize), GenerationError> {
    for attempt in 1..=max_attempts {
        let letters = draw_letters(pool, count, rng);
        let vowels = count_vowels(&letters);

        if (min_vowels..=max_vowels).contains(&vowels) {
            return Ok((letters, attempt));
        }

        tracing::trace!(attempt, vowels, "letter draw rejected");
    }

    Err(GenerationError::SelectionExhausted {
        attempts: max_attempts,
        min_vowels,
    })
}
