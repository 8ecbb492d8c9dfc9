//! Generator statistics
//!
//! Generates many boards in parallel and summarises how many attempts each
//! phase needed and how often generation gave up.

use crate::generator::{BoardGenerator, GenerationError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Attempt counts for one generation phase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttemptSummary {
    pub average: f64,
    pub max: usize,
    /// Boards that needed a single attempt
    pub first_try: usize,
}

impl AttemptSummary {
    fn from_counts(counts: &[usize]) -> Self {
        if counts.is_empty() {
            return Self::default();
        }
        Self {
            average: counts.iter().sum::<usize>() as f64 / counts.len() as f64,
            max: counts.iter().copied().max().unwrap_or(0),
            first_try: counts.iter().filter(|&&c| c == 1).count(),
        }
    }
}

#[derive(Debug)]
pub struct GenerationStats {
    pub boards: usize,
    pub generated: usize,
    /// Failures keyed by reason
    pub failures: BTreeMap<&'static str, usize>,
    pub selection: AttemptSummary,
    pub assignment: AttemptSummary,
    /// Boards by total vowel count
    pub vowel_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Short name for a generation failure
#[must_use]
pub const fn failure_reason(error: &GenerationError) -> &'static str {
    match error {
        GenerationError::PoolTooSmall { .. } => "pool too small",
        GenerationError::InvalidConfig(_) => "invalid config",
        GenerationError::SelectionExhausted { .. } => "selection exhausted",
        GenerationError::AssignmentExhausted { .. } => "assignment exhausted",
    }
}

/// Generate `count` boards, board `i` seeded with `seed + i`
///
/// Results are independent of thread scheduling.
#[must_use]
pub fn run_stats(
    generator: &BoardGenerator,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> GenerationStats {
    let pb = if show_progress {
        progress_bar(count)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<_> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let result = generator.generate(&mut rng);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut failures = BTreeMap::new();
    let mut vowel_distribution = BTreeMap::new();
    let mut selection = Vec::with_capacity(count);
    let mut assignment = Vec::with_capacity(count);

    for result in &results {
        match result {
            Ok(generated) => {
                selection.push(generated.selection_attempts);
                assignment.push(generated.assignment_attempts);
                *vowel_distribution
                    .entry(generated.board.vowel_count())
                    .or_insert(0) += 1;
            }
            Err(e) => *failures.entry(failure_reason(e)).or_insert(0) += 1,
        }
    }

    tracing::debug!(count, generated = selection.len(), ?duration, "stats run finished");

    GenerationStats {
        boards: count,
        generated: selection.len(),
        failures,
        selection: AttemptSummary::from_counts(&selection),
        assignment: AttemptSummary::from_counts(&assignment),
        vowel_distribution,
        duration,
    }
}

fn progress_bar(count: usize) -> ProgressBar {
    let pb = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
