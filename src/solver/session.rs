//! Solving session
//!
//! A `Session` owns the constraint state, the active candidate set, and the
//! guess history for one game. Each confirmed round folds the feedback into
//! the constraints, narrows the active set, and recomputes the recommendation.

use super::partition::select_best_guess;
use crate::core::{
    ConstraintState, DEFAULT_WORD_LENGTH, Feedback, FeedbackError, Word, WordError,
};
use crate::error::SolverError;

/// Settings for a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of letters per word
    pub word_length: usize,
    /// Evaluate candidate guesses on the rayon thread pool
    pub parallel: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            parallel: true,
        }
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Where a session stands after its latest round
///
/// An empty active set is reported as `Exhausted` even when every position
/// is bound, since a contradictory history can bind all positions too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for the next guess and its feedback
    InProgress,
    /// Every position is bound to a letter
    Solved,
    /// No candidate is consistent with the feedback history
    Exhausted,
}

/// State snapshot for undo, taken before each round
struct Snapshot<'a> {
    state: ConstraintState,
    active: Vec<&'a Word>,
    recommendation: Option<(&'a Word, usize)>,
}

/// An interactive solving session over a shared, read-only dictionary
pub struct Session<'a> {
    config: SessionConfig,
    dictionary: &'a [Word],
    state: ConstraintState,
    active: Vec<&'a Word>,
    history: Vec<GuessRecord>,
    recommendation: Option<(&'a Word, usize)>,
    undo_stack: Vec<Snapshot<'a>>,
}

impl<'a> Session<'a> {
    /// Start a session over `dictionary`
    ///
    /// Every dictionary word is assumed to have `config.word_length` letters.
    /// The first recommendation is computed immediately.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::Word;
    /// use wordle_partition::solver::{Session, SessionConfig};
    ///
    /// let dictionary: Vec<Word> = ["abide", "abyss", "eager", "learn", "range"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let mut session = Session::new(&dictionary, SessionConfig::default());
    /// let guess = Word::new("learn").unwrap();
    /// session.submit_guess(&guess, "illll").unwrap();
    ///
    /// assert_eq!(session.recommended_guess().unwrap().text(), "range");
    /// ```
    #[must_use]
    pub fn new(dictionary: &'a [Word], config: SessionConfig) -> Self {
        debug_assert!(
            dictionary.iter().all(|w| w.len() == config.word_length),
            "dictionary words must match the configured length"
        );

        let mut session = Self {
            config,
            dictionary,
            state: ConstraintState::new(config.word_length),
            active: dictionary.iter().collect(),
            history: Vec::new(),
            recommendation: None,
            undo_stack: Vec::new(),
        };
        session.recommend();
        session
    }

    /// Submit a guess together with its textual feedback (e.g. `"cliil"`)
    ///
    /// The guess and feedback are validated before anything changes.
    ///
    /// # Errors
    /// - `SolverError::InvalidWord` if the guess has the wrong length
    /// - `SolverError::MalformedFeedback` if the feedback cannot be decoded
    /// - `SolverError::NoCandidatesRemaining` if the round eliminated every
    ///   candidate; the round is still recorded so it can be undone
    pub fn submit_guess(&mut self, guess: &Word, feedback_text: &str) -> Result<(), SolverError> {
        self.check_length(guess)?;
        let feedback = Feedback::decode(feedback_text, self.config.word_length)?;
        self.apply_feedback(guess.clone(), feedback)
    }

    /// Apply an already-decoded round
    ///
    /// # Errors
    /// - `SolverError::InvalidWord` if the guess length is wrong
    /// - `SolverError::MalformedFeedback` if the feedback length is wrong
    /// - `SolverError::NoCandidatesRemaining` as for `submit_guess`
    pub fn apply_feedback(&mut self, guess: Word, feedback: Feedback) -> Result<(), SolverError> {
        self.check_length(&guess)?;
        if feedback.len() != self.config.word_length {
            return Err(SolverError::MalformedFeedback(FeedbackError::WrongLength {
                expected: self.config.word_length,
                actual: feedback.len(),
            }));
        }

        self.undo_stack.push(Snapshot {
            state: self.state.clone(),
            active: self.active.clone(),
            recommendation: self.recommendation,
        });

        let before = self.active.len();
        self.state.update(&guess, &feedback);
        let state = &self.state;
        self.active.retain(|w| state.is_valid(w));
        log::debug!(
            "{guess} {feedback}: {before} -> {} candidates",
            self.active.len()
        );

        self.history.push(GuessRecord { guess, feedback });
        self.recommend();

        match self.status() {
            SessionStatus::Exhausted => Err(SolverError::NoCandidatesRemaining),
            SessionStatus::InProgress | SessionStatus::Solved => Ok(()),
        }
    }

    /// The recommended next guess
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidatesRemaining` when the active set is empty.
    pub fn recommended_guess(&self) -> Result<&'a Word, SolverError> {
        self.recommendation
            .map(|(word, _)| word)
            .ok_or(SolverError::NoCandidatesRemaining)
    }

    /// Partition metric of the current recommendation
    #[must_use]
    pub fn recommended_metric(&self) -> Option<usize> {
        self.recommendation.map(|(_, metric)| metric)
    }

    /// Whether every position has been bound by `Matched` feedback
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.active.is_empty() {
            SessionStatus::Exhausted
        } else if self.state.is_solved() {
            SessionStatus::Solved
        } else {
            SessionStatus::InProgress
        }
    }

    /// Drop the last round, restoring the session as it was before it
    ///
    /// Returns the removed round, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<GuessRecord> {
        let snapshot = self.undo_stack.pop()?;
        let removed = self.history.pop()?;

        self.state = snapshot.state;
        self.active = snapshot.active;
        self.recommendation = snapshot.recommendation;

        log::debug!(
            "undid {}; {} candidates",
            removed.guess,
            self.active.len()
        );
        Some(removed)
    }

    /// Start over with the full dictionary and no knowledge
    pub fn reset(&mut self) {
        self.state = ConstraintState::new(self.config.word_length);
        self.active = self.dictionary.iter().collect();
        self.history.clear();
        self.undo_stack.clear();
        self.recommend();
    }

    /// Words still consistent with every round, in dictionary order
    #[must_use]
    pub fn active(&self) -> &[&'a Word] {
        &self.active
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    fn recommend(&mut self) {
        self.recommendation = select_best_guess(&self.active, &self.state, self.config.parallel);
    }

    fn check_length(&self, guess: &Word) -> Result<(), SolverError> {
        if guess.len() == self.config.word_length {
            Ok(())
        } else {
            Err(SolverError::InvalidWord(WordError::InvalidLength {
                expected: self.config.word_length,
                actual: guess.len(),
            }))
        }
    }
}
