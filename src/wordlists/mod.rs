//! Word lists for solving
//!
//! Provides the embedded default dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
