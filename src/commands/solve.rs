//! Word solving command
//!
//! Plays a session against a known target and records each step.

use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::{Session, SessionConfig};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            session: SessionConfig::new(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub metric: usize,
}

/// Solve a specific word over `dictionary`
///
/// The target does not have to be in the dictionary, but if it is not the
/// session will usually run out of candidates.
///
/// # Errors
///
/// Returns an error if:
/// - The target word does not have the configured length or has non-letters
/// - The candidates run out before the target is found
pub fn solve_word(config: &SolveConfig, dictionary: &[Word]) -> Result<SolveResult, SolverError> {
    let target = Word::with_length(config.target.as_str(), config.session.word_length)?;
    let mut session = Session::new(dictionary, config.session);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.active().len();
        let guess = session.recommended_guess()?;
        let metric = session.recommended_metric().unwrap_or_default();

        let feedback = Feedback::classify(&target, guess);
        session.apply_feedback(guess.clone(), feedback.clone())?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: session.active().len(),
            metric,
        });

        if session.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    fn small() -> Vec<Word> {
        words_from_slice(&["abide", "abyss", "eager", "learn", "range"], 5)
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = small();
        let config = SolveConfig::new("range".to_string());

        let result = solve_word(&config, &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "range");
        assert_eq!(result.guesses.last().unwrap().word, "range");
        assert!(result.guesses.last().unwrap().feedback.is_all_matched());
    }

    #[test]
    fn solve_records_history() {
        let dictionary = small();
        let config = SolveConfig::new("abyss".to_string());

        let result = solve_word(&config, &dictionary).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.metric >= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = small();
        let config = SolveConfig::new("toolong".to_string());

        assert!(matches!(
            solve_word(&config, &dictionary),
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn solve_target_outside_dictionary_runs_out() {
        let dictionary = small();
        let config = SolveConfig::new("zzzzz".to_string());

        assert_eq!(
            solve_word(&config, &dictionary).err(),
            Some(SolverError::NoCandidatesRemaining)
        );
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let dictionary = words_from_slice(DICTIONARY, 5);
        let mut config = SolveConfig::new("crane".to_string());
        config.max_guesses = 1;

        let result = solve_word(&config, &dictionary).unwrap();

        assert!(result.guesses.len() <= 1);
    }

    #[test]
    fn solve_embedded_dictionary_word() {
        let dictionary = words_from_slice(DICTIONARY, 5);
        let mut config = SolveConfig::new("learn".to_string());
        config.max_guesses = 10;

        let result = solve_word(&config, &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "learn");
    }
}
