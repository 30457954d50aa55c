//! Partition-metric guess selection
//!
//! Scores a guess by simulating each active candidate as the answer and
//! counting how many candidates would survive the resulting constraints.
//! Lower scores split the active set into smaller, more even groups.

mod calculator;
mod selector;

pub use calculator::{calculate_metric, partition_counts, sum_of_squares};
pub use selector::select_best_guess;
