//! Guess selection and session orchestration

pub mod partition;
mod session;

pub use session::{GuessRecord, Session, SessionConfig, SessionStatus};
