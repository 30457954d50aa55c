//! Word analysis command
//!
//! Reports how a single opening guess partitions the dictionary.

use crate::core::{ConstraintState, Feedback, Word};
use crate::error::SolverError;
use crate::solver::partition::{calculate_metric, partition_counts, sum_of_squares};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metric: usize,
    pub sum_of_squares: usize,
    pub expected_remaining: f64,
    /// Feedback groups, largest first
    pub partitions: Vec<(Feedback, usize)>,
    pub total_candidates: usize,
}

/// Analyze `word` as an opening guess over `dictionary`
///
/// The word does not have to be in the dictionary.
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` if the word is not `word_length` letters.
pub fn analyze_word(
    word: &str,
    dictionary: &[Word],
    word_length: usize,
) -> Result<AnalysisResult, SolverError> {
    let guess = Word::with_length(word, word_length)?;
    let active: Vec<&Word> = dictionary.iter().collect();
    let state = ConstraintState::new(word_length);

    let counts = partition_counts(&guess, &active);
    let metric = calculate_metric(&guess, &active, &state);
    let squares = sum_of_squares(&counts);

    let mut partitions: Vec<(Feedback, usize)> = counts.into_iter().collect();
    partitions.sort_by(|(fa, a), (fb, b)| b.cmp(a).then_with(|| fa.encode().cmp(&fb.encode())));

    let total_candidates = active.len();
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        metric as f64 / total_candidates as f64
    };

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        metric,
        sum_of_squares: squares,
        expected_remaining,
        partitions,
        total_candidates,
    })
}
