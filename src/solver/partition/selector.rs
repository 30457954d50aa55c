//! Partition-metric guess selection
//!
//! Evaluates every active candidate as the next guess and keeps the one with
//! the lowest metric. Ties go to the candidate that comes first in the active
//! set, which preserves dictionary order.

use super::calculator::calculate_metric;
use crate::core::{ConstraintState, Word};
use rayon::prelude::*;

/// Select the active candidate with the lowest partition metric
///
/// Returns the word and its metric, or `None` if `active` is empty. With
/// `parallel` set the per-guess metrics are computed on the rayon pool; the
/// result is identical either way.
///
/// # Examples
/// ```
/// use wordle_partition::core::{ConstraintState, Word};
/// use wordle_partition::solver::partition::select_best_guess;
///
/// let words: Vec<Word> = ["abide", "abyss", "eager", "learn", "range"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let active: Vec<&Word> = words.iter().collect();
///
/// let (best, metric) = select_best_guess(&active, &ConstraintState::new(5), true).unwrap();
/// // LEARN and RANGE leave one candidate per answer; LEARN comes first
/// assert_eq!(best.text(), "learn");
/// assert_eq!(metric, 5);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    active: &[&'a Word],
    state: &ConstraintState,
    parallel: bool,
) -> Option<(&'a Word, usize)> {
    let best = if parallel {
        active
            .par_iter()
            .enumerate()
            .map(|(index, &guess)| (index, calculate_metric(guess, active, state)))
            .min_by_key(|&(index, metric)| (metric, index))
    } else {
        active
            .iter()
            .enumerate()
            .map(|(index, &guess)| (index, calculate_metric(guess, active, state)))
            .min_by_key(|&(index, metric)| (metric, index))
    };

    best.map(|(index, metric)| {
        log::debug!(
            "selected {} (metric {metric}) from {} candidates",
            active[index],
            active.len()
        );
        (active[index], metric)
    })
}
