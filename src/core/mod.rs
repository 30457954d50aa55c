//! Core domain types
//!
//! Words, feedback classification, and the constraint model. Everything here
//! is pure and synchronous; no module depends on the solver or the CLI.

mod constraints;
mod feedback;
mod letters;
mod word;

pub use constraints::ConstraintState;
pub use feedback::{Feedback, FeedbackError, Outcome};
pub use letters::LetterSet;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
