//! Solver error type

use crate::core::{FeedbackError, WordError};
use std::fmt;

/// Errors surfaced by a solving session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Feedback text could not be decoded; the session was not touched
    MalformedFeedback(FeedbackError),
    /// The submitted guess does not fit the session's word length
    InvalidWord(WordError),
    /// Every candidate has been eliminated by the feedback history
    NoCandidatesRemaining,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedFeedback(e) => write!(f, "Malformed feedback: {e}"),
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::NoCandidatesRemaining => write!(
                f,
                "No candidates remain; the feedback history is contradictory"
            ),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedFeedback(e) => Some(e),
            Self::InvalidWord(e) => Some(e),
            Self::NoCandidatesRemaining => None,
        }
    }
}

impl From<FeedbackError> for SolverError {
    fn from(e: FeedbackError) -> Self {
        Self::MalformedFeedback(e)
    }
}

impl From<WordError> for SolverError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
