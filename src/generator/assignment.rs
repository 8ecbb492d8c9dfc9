//! Assignment phase: split selected letters across the four sides

use super::GenerationError;
use crate::core::count_vowels;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle `letters` into four groups of `per_side` until no group holds
/// more than `max_vowels_per_side` vowels
///
/// Returns the groups in `top, left, right, bottom` order and the number of
/// shuffles it took.
pub(crate) fn assign_sides<R: Rng + ?Sized>(
    mut letters: Vec<char>,
    per_side: usize,
    max_vowels_per_side: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<([Vec<char>; 4], usize), GenerationError> {
    debug_assert_eq!(letters.len(), per_side * 4);

    for attempt in 1..=max_attempts {
        letters.shuffle(rng);

        if letters
            .chunks(per_side)
            .all(|group| count_vowels(group) <= max_vowels_per_side)
        {
            let mut groups: [Vec<char>; 4] = Default::default();
            for (group, chunk) in groups.iter_mut().zip(letters.chunks(per_side)) {
                group.extend_from_slice(chunk);
            }
            return Ok((groups, attempt));
        }

        tracing::trace!(attempt, "side assignment rejected");
    }

    Err(GenerationError::AssignmentExhausted {
        attempts: max_attempts,
        max_vowels_per_side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letters(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn assignment_keeps_every_letter() {
        let mut rng = StdRng::seed_from_u64(42);
        let (groups, _) = assign_sides(letters("ATEMPSRONCID"), 3, 2, 200, &mut rng).unwrap();

        let mut all: Vec<char> = groups.iter().flatten().copied().collect();
        all.sort_unstable();
        let mut expected = letters("ATEMPSRONCID");
        expected.sort_unstable();
        assert_eq!(all, expected);
        assert!(groups.iter().all(|g| g.len() == 3));
    }

    #[test]
    fn assignment_spreads_vowels() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..50 {
            // Eight vowels leave exactly one legal spread: two per side
            let (groups, _) = assign_sides(letters("AEIOUAEIBCDF"), 3, 2, 10_000, &mut rng)
                .unwrap_or_else(|e| panic!("{e}"));
            assert!(groups.iter().all(|g| count_vowels(g) <= 2));
        }
    }

    #[test]
    fn assignment_exhausts_on_impossible_limit() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = assign_sides(letters("ATEMPSRONCID"), 3, 0, 30, &mut rng);

        assert_eq!(
            result,
            Err(GenerationError::AssignmentExhausted {
                attempts: 30,
                max_vowels_per_side: 0
            })
        );
    }
}
