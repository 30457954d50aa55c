//! Partition metric calculation
//!
//! For a guess `g` and active set `A`:
//!
//! metric(g) = Σ over a in A of |{ w in A : valid(update(state, g, classify(a, g)), w) }|
//!
//! The simulated state depends only on the feedback pattern, so survivors are
//! counted once per distinct pattern and weighted by how many answers
//! produce it.

use crate::core::{ConstraintState, Feedback, Word};
use rustc_hash::FxHashMap;

/// Group the active candidates by the feedback `guess` would receive
///
/// The counts always sum to `active.len()`.
///
/// # Examples
/// ```
/// use wordle_partition::core::Word;
/// use wordle_partition::solver::partition::partition_counts;
///
/// let active: Vec<Word> = ["abide", "abyss", "eager", "learn", "range"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = active.iter().collect();
///
/// let counts = partition_counts(&active[3], &refs);
/// assert_eq!(counts.values().sum::<usize>(), 5);
/// ```
#[must_use]
pub fn partition_counts(guess: &Word, active: &[&Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &answer in active {
        let feedback = Feedback::classify(answer, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Compute the partition metric for `guess` over `active`
///
/// Returns 0 for an empty active set.
#[must_use]
pub fn calculate_metric(guess: &Word, active: &[&Word], state: &ConstraintState) -> usize {
    partition_counts(guess, active)
        .iter()
        .map(|(feedback, &count)| {
            let simulated = state.updated(guess, feedback);
            let survivors = active.iter().filter(|w| simulated.is_valid(w)).count();
            count * survivors
        })
        .sum()
}

/// Σ count(p)² over a pattern distribution
///
/// A lower bound for `calculate_metric`. The two differ when a simulated
/// state still accepts words from other patterns, as happens for guesses
/// with a repeated letter.
#[must_use]
pub fn sum_of_squares<S>(counts: &std::collections::HashMap<Feedback, usize, S>) -> usize
where
    S: std::hash::BuildHasher,
{
    counts.values().map(|&count| count * count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    const SMALL: &[&str] = &["abide", "abyss", "eager", "learn", "range"];

    #[test]
    fn counts_sum_to_active_size() {
        let active = words(SMALL);
        let refs: Vec<&Word> = active.iter().collect();

        for guess in &active {
            let counts = partition_counts(guess, &refs);
            assert_eq!(counts.values().sum::<usize>(), refs.len());
        }
    }

    #[test]
    fn metric_matches_sum_of_squares_for_distinct_letters() {
        let active = words(SMALL);
        let refs: Vec<&Word> = active.iter().collect();
        let state = ConstraintState::new(5);

        let guess = Word::new("learn").unwrap();
        let counts = partition_counts(&guess, &refs);
        assert_eq!(
            calculate_metric(&guess, &refs, &state),
            sum_of_squares(&counts)
        );
    }

    #[test]
    fn repeated_letter_guess_exceeds_sum_of_squares() {
        // On answer RANGE, EAGER gets "lclll", and that state still accepts EAGER
        let active = words(SMALL);
        let refs: Vec<&Word> = active.iter().collect();
        let state = ConstraintState::new(5);

        let guess = Word::new("eager").unwrap();
        let counts = partition_counts(&guess, &refs);
        assert_eq!(sum_of_squares(&counts), 5);
        assert_eq!(calculate_metric(&guess, &refs, &state), 6);

        let guess = Word::new("abide").unwrap();
        let counts = partition_counts(&guess, &refs);
        assert_eq!(sum_of_squares(&counts), 7);
        assert_eq!(calculate_metric(&guess, &refs, &state), 9);
    }

    #[test]
    fn metric_never_below_sum_of_squares() {
        let active = words(SMALL);
        let refs: Vec<&Word> = active.iter().collect();
        let state = ConstraintState::new(5);

        for guess in &active {
            let counts = partition_counts(guess, &refs);
            assert!(calculate_metric(guess, &refs, &state) >= sum_of_squares(&counts));
        }
    }

    #[test]
    fn metric_bounds() {
        // Between n (perfect split) and n² (no split)
        let active = words(SMALL);
        let refs: Vec<&Word> = active.iter().collect();
        let state = ConstraintState::new(5);

        for guess in &active {
            let metric = calculate_metric(guess, &refs, &state);
            assert!(metric >= refs.len(), "{guess}: {metric}");
            assert!(metric <= refs.len() * refs.len(), "{guess}: {metric}");
        }
    }

    #[test]
    fn metric_no_split_is_n_squared() {
        let active = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = active.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        let metric = calculate_metric(&guess, &refs, &ConstraintState::new(5));
        assert_eq!(metric, 9);
    }

    #[test]
    fn metric_perfect_split_is_n() {
        let active = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = active.iter().collect();
        let guess = Word::new("abcxx").unwrap();

        let metric = calculate_metric(&guess, &refs, &ConstraintState::new(5));
        assert_eq!(metric, 3);
    }

    #[test]
    fn metric_empty_active_set() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(calculate_metric(&guess, &[], &ConstraintState::new(5)), 0);
        assert!(partition_counts(&guess, &[]).is_empty());
    }

    #[test]
    fn sum_of_squares_of_distribution() {
        let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        counts.insert(Feedback::decode("ccccc", 5).unwrap(), 1);
        counts.insert(Feedback::decode("iiiii", 5).unwrap(), 3);
        assert_eq!(sum_of_squares(&counts), 10);
    }
}
