//! Accumulated knowledge about the hidden answer
//!
//! A `ConstraintState` folds every round's feedback into three facts:
//! letters known absent, letters known present, and letters bound to a
//! position. Knowledge only grows; `update` never removes anything.

use super::{Feedback, LetterSet, Outcome, Word};

/// Constraint knowledge gathered from all feedback seen so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    absent: LetterSet,
    present: LetterSet,
    placement: Vec<Option<u8>>,
}

impl ConstraintState {
    /// Empty knowledge for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            absent: LetterSet::EMPTY,
            present: LetterSet::EMPTY,
            placement: vec![None; word_length],
        }
    }

    /// Fold one round of feedback into this state
    ///
    /// `Matched` binds the position and marks the letter present, `Present`
    /// marks it present, and `Absent` marks it absent unless another position
    /// of the same guess reported the letter as `Matched` or `Present`.
    /// No letter counts are tracked.
    ///
    /// A bound position keeps its first letter. A later `Matched` with a
    /// different letter there still marks that letter present.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        debug_assert_eq!(guess.len(), self.placement.len());
        debug_assert_eq!(feedback.len(), self.placement.len());

        let mut reported = LetterSet::EMPTY;
        for (position, (&letter, &outcome)) in
            guess.letters().iter().zip(feedback.outcomes()).enumerate()
        {
            match outcome {
                Outcome::Matched => {
                    self.placement[position].get_or_insert(letter);
                    self.present.insert(letter);
                    reported.insert(letter);
                }
                Outcome::Present => {
                    self.present.insert(letter);
                    reported.insert(letter);
                }
                Outcome::Absent => {}
            }
        }

        for (&letter, &outcome) in guess.letters().iter().zip(feedback.outcomes()) {
            if outcome == Outcome::Absent && !reported.contains(letter) {
                self.absent.insert(letter);
            }
        }
    }

    /// A copy of this state with one more round applied
    #[must_use]
    pub fn updated(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.update(guess, feedback);
        next
    }

    /// Whether `candidate` is still consistent with this state
    ///
    /// Scans left to right, rejecting on an absent letter, on a mismatch with
    /// a bound position, or as soon as the known-present letters seen so far
    /// plus the positions left cannot cover every known-present letter.
    ///
    /// This is a necessary condition only: with repeated letters a word can
    /// pass without matching the exact letter counts of the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{ConstraintState, Feedback, Word};
    ///
    /// let guess = Word::new("learn").unwrap();
    /// let feedback = Feedback::decode("illll", 5).unwrap();
    /// let state = ConstraintState::new(5).updated(&guess, &feedback);
    ///
    /// assert!(state.is_valid(&Word::new("range").unwrap()));
    /// assert!(!state.is_valid(&Word::new("abide").unwrap()));
    /// ```
    #[must_use]
    pub fn is_valid(&self, candidate: &Word) -> bool {
        let length = self.placement.len();
        debug_assert_eq!(candidate.len(), length);

        let required = self.present.len();
        let mut seen = LetterSet::EMPTY;

        for (position, &letter) in candidate.letters().iter().enumerate() {
            if self.absent.contains(letter) {
                return false;
            }

            if let Some(bound) = self.placement[position]
                && bound != letter
            {
                return false;
            }

            if self.present.contains(letter) {
                seen.insert(letter);
            }

            let remaining = length - 1 - position;
            if seen.len() + remaining < required {
                return false;
            }
        }

        true
    }

    /// Whether every position is bound to a letter
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.placement.iter().all(Option::is_some)
    }

    /// Letters confirmed never to occur
    #[must_use]
    pub const fn absent(&self) -> LetterSet {
        self.absent
    }

    /// Letters confirmed to occur somewhere
    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.present
    }

    /// Per-position bound letters
    #[must_use]
    pub fn placement(&self) -> &[Option<u8>] {
        &self.placement
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.placement.len()
    }

    /// The placement rendered as text, `_` for unbound positions
    #[must_use]
    pub fn placement_pattern(&self) -> String {
        self.placement
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(text: &str) -> Feedback {
        Feedback::decode(text, 5).unwrap()
    }

    #[test]
    fn empty_state_accepts_everything() {
        let state = ConstraintState::new(5);
        for text in ["abide", "abyss", "eager", "learn", "range"] {
            assert!(state.is_valid(&word(text)));
        }
        assert!(!state.is_solved());
        assert_eq!(state.placement_pattern(), "_____");
    }

    #[test]
    fn update_records_each_outcome() {
        let mut state = ConstraintState::new(5);
        state.update(&word("learn"), &feedback("illll"));

        assert_eq!(state.absent().to_string(), "l");
        assert_eq!(state.present().to_string(), "aenr");
        assert!(state.placement().iter().all(Option::is_none));
    }

    #[test]
    fn matched_binds_placement_and_presence() {
        let mut state = ConstraintState::new(5);
        state.update(&word("range"), &feedback("ciiii"));

        assert_eq!(state.placement()[0], Some(b'r'));
        assert!(state.present().contains(b'r'));
        assert_eq!(state.placement_pattern(), "r____");
        assert_eq!(state.absent().to_string(), "aegn");
    }

    #[test]
    fn absent_skipped_when_reported_elsewhere_in_guess() {
        let mut state = ConstraintState::new(5);
        // Official-style feedback: first E absent, second E matched
        state.update(&word("eerie"), &feedback("iiiic"));

        assert!(!state.absent().contains(b'e'));
        assert!(state.present().contains(b'e'));
        assert_eq!(state.absent().to_string(), "ir");
    }

    #[test]
    fn learn_feedback_rejects_abide_accepts_range() {
        let state = ConstraintState::new(5).updated(&word("learn"), &feedback("illll"));

        assert!(state.is_valid(&word("range")));
        assert!(!state.is_valid(&word("abide")));
        assert!(!state.is_valid(&word("learn")));
        assert!(!state.is_valid(&word("abyss")));
    }

    #[test]
    fn bound_position_must_match() {
        let state = ConstraintState::new(5).updated(&word("abyss"), &feedback("ciiii"));

        assert!(state.is_valid(&word("angel")));
        assert!(!state.is_valid(&word("eager")));
    }

    #[test]
    fn feasibility_prune_needs_room_for_present_letters() {
        let state = ConstraintState::new(5).updated(&word("range"), &feedback("lllli"));

        // R, A, N, G all required; ALONG lacks R
        assert!(!state.is_valid(&word("along")));
        assert!(state.is_valid(&word("grand")));
    }

    #[test]
    fn update_is_monotonic() {
        let mut state = ConstraintState::new(5);
        state.update(&word("learn"), &feedback("illll"));
        let before = state.clone();
        state.update(&word("range"), &feedback("ccccc"));

        assert!(before.present().iter().all(|l| state.present().contains(l)));
        assert!(before.absent().iter().all(|l| state.absent().contains(l)));
        assert!(state.is_solved());
    }

    #[test]
    fn bound_position_keeps_first_letter() {
        let mut state = ConstraintState::new(5);
        state.update(&word("rocky"), &feedback("ciiii"));
        state.update(&word("ahead"), &feedback("ciiii"));

        assert_eq!(state.placement()[0], Some(b'r'));
        assert!(state.present().contains(b'a'));
        assert_eq!(state.placement_pattern(), "r____");
        assert!(!state.is_valid(&word("argus")));
    }

    #[test]
    fn contradictory_history_rejects_everything() {
        let mut state = ConstraintState::new(5);
        state.update(&word("range"), &feedback("ccccc"));
        state.update(&word("range"), &feedback("iiiii"));

        assert!(!state.is_valid(&word("range")));
    }

    #[test]
    fn custom_word_length() {
        let guess = Word::with_length("cat", 3).unwrap();
        let state =
            ConstraintState::new(3).updated(&guess, &Feedback::decode("cil", 3).unwrap());

        assert!(state.is_valid(&Word::with_length("cot", 3).unwrap()));
        assert!(!state.is_valid(&Word::with_length("cab", 3).unwrap()));
        assert_eq!(state.word_length(), 3);
    }
}
