//! Benchmark command
//!
//! Self-plays the solver against many targets and collects statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::SessionConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// Targets that were not solved within the guess limit
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against each target word
///
/// Failures include targets whose session ran out of candidates. Averages
/// are over solved targets only.
pub fn run_benchmark(
    dictionary: &[Word],
    targets: &[Word],
    session: SessionConfig,
    max_guesses: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for target in targets {
        pb.set_message(target.text().to_uppercase());

        let config = SolveConfig {
            target: target.text().to_string(),
            max_guesses,
            session,
        };

        match solve_word(&config, dictionary) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses_seen = max_guesses_seen.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok(_) => failures.push(target.text().to_string()),
            Err(e) => {
                log::warn!("{target}: {e}");
                failures.push(target.text().to_string());
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
