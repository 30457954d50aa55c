//! Wordle Partition Solver
//!
//! An interactive solver for fixed-length letter-guessing games. It keeps the
//! set of words consistent with all feedback so far and recommends the guess
//! that splits that set most evenly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_partition::core::{Feedback, Word};
//! use wordle_partition::solver::{Session, SessionConfig};
//! use wordle_partition::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(DICTIONARY, 5);
//! let mut session = Session::new(&dictionary, SessionConfig::default());
//!
//! // Feedback as the game would report it for the answer RANGE
//! let answer = Word::new("range").unwrap();
//! let guess = session.recommended_guess().unwrap().clone();
//! let feedback = Feedback::classify(&answer, &guess);
//!
//! session.submit_guess(&guess, &feedback.encode()).unwrap();
//! assert!(session.active().iter().any(|w| w.text() == "range"));
//! ```

// Core domain types
pub mod core;

// Error type shared by the solver and commands
pub mod error;

// Guess selection and sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
