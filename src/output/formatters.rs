//! Formatting utilities for terminal output

use crate::core::{ConstraintState, Word};
use crate::solver::GuessRecord;

/// Summarize what is known so far, e.g. `R___E  present: aegnr  absent: l`
#[must_use]
pub fn format_knowledge(state: &ConstraintState) -> String {
    format!(
        "{}  present: {}  absent: {}",
        state.placement_pattern().to_uppercase(),
        state.present(),
        state.absent()
    )
}

/// Format the guess history, one numbered row per round
#[must_use]
pub fn format_history(history: &[GuessRecord]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "    {}. {} {}",
                i + 1,
                record.guess.text().to_uppercase(),
                record.feedback.to_emoji()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format candidate words as an indented bullet list
#[must_use]
pub fn format_candidates(candidates: &[&Word]) -> String {
    candidates
        .iter()
        .map(|word| format!("  • {}", word.text().to_uppercase()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
