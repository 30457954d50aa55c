//! Feedback classification and its textual encoding
//!
//! Feedback is one `Outcome` per position, index-aligned with the guess:
//! - `Matched` ('c') = letter in the answer at this position
//! - `Present` ('l') = letter in the answer somewhere else
//! - `Absent`  ('i') = letter not in the answer
//!
//! Classification uses plain letter membership rather than multiset
//! consumption. When a guess repeats a letter that the answer holds once,
//! every copy is marked `Present` or `Matched`, which differs from the
//! official game's duplicate-letter accounting.

use super::Word;
use std::fmt;

/// The outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Correct letter in the correct position
    Matched,
    /// Letter occurs in the answer, not at this position
    Present,
    /// Letter does not occur in the answer
    Absent,
}

impl Outcome {
    /// The character used for this outcome in the textual encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Matched => 'c',
            Self::Present => 'l',
            Self::Absent => 'i',
        }
    }

    /// Parse a single encoding character
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(Self::Matched),
            'l' => Some(Self::Present),
            'i' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Matched => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Why a feedback string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    WrongLength { expected: usize, actual: usize },
    InvalidSymbol { position: usize, symbol: char },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Feedback must be exactly {expected} characters, got {actual}")
            }
            Self::InvalidSymbol { position, symbol } => write!(
                f,
                "Invalid feedback character '{symbol}' at position {}; use c, l or i",
                position + 1
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Per-position feedback for one guess
///
/// Its length always equals the word length it was built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Outcome>);

impl Feedback {
    /// Classify `guess` against a known `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{Feedback, Word};
    ///
    /// let answer = Word::new("range").unwrap();
    /// let guess = Word::new("learn").unwrap();
    /// assert_eq!(Feedback::classify(&answer, &guess).encode(), "illll");
    /// ```
    #[must_use]
    pub fn classify(answer: &Word, guess: &Word) -> Self {
        debug_assert_eq!(answer.len(), guess.len(), "words must share a length");

        let outcomes = guess
            .letters()
            .iter()
            .zip(answer.letters())
            .map(|(&letter, &expected)| {
                if !answer.has_letter(letter) {
                    Outcome::Absent
                } else if letter == expected {
                    Outcome::Matched
                } else {
                    Outcome::Present
                }
            })
            .collect();

        Self(outcomes)
    }

    /// Decode a textual feedback string such as `"cliil"`
    ///
    /// The whole string is validated before anything is returned.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the text is not exactly `length` characters
    /// or contains a character other than `c`, `l` or `i`.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{Feedback, FeedbackError};
    ///
    /// let feedback = Feedback::decode("cliil", 5).unwrap();
    /// assert_eq!(feedback.encode(), "cliil");
    ///
    /// assert!(matches!(
    ///     Feedback::decode("cliq?", 5),
    ///     Err(FeedbackError::InvalidSymbol { position: 3, symbol: 'q' })
    /// ));
    /// ```
    pub fn decode(text: &str, length: usize) -> Result<Self, FeedbackError> {
        let actual = text.chars().count();
        if actual != length {
            return Err(FeedbackError::WrongLength {
                expected: length,
                actual,
            });
        }

        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Outcome::from_symbol(symbol)
                    .ok_or(FeedbackError::InvalidSymbol { position, symbol })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Encode back into the `c`/`l`/`i` text form
    #[must_use]
    pub fn encode(&self) -> String {
        self.0.iter().map(|outcome| outcome.symbol()).collect()
    }

    /// Render as coloured squares, e.g. "⬜🟨🟨🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|outcome| outcome.emoji()).collect()
    }

    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every position is `Matched`
    #[must_use]
    pub fn is_all_matched(&self) -> bool {
        self.0.iter().all(|&outcome| outcome == Outcome::Matched)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn classify_self_is_all_matched() {
        for &text in DICTIONARY.iter().chain(&["aaaaa"]) {
            let w = word(text);
            let feedback = Feedback::classify(&w, &w);
            assert!(feedback.is_all_matched(), "{text} should match itself");
            assert_eq!(feedback.encode(), "ccccc");
        }
    }

    #[test]
    fn classify_learn_against_range() {
        let feedback = Feedback::classify(&word("range"), &word("learn"));
        assert_eq!(
            feedback.outcomes(),
            &[
                Outcome::Absent,
                Outcome::Present,
                Outcome::Present,
                Outcome::Present,
                Outcome::Present,
            ]
        );
    }

    #[test]
    fn classify_all_absent() {
        let feedback = Feedback::classify(&word("fghij"), &word("abcde"));
        assert_eq!(feedback.encode(), "iiiii");
        assert!(feedback.outcomes().iter().all(|&o| o == Outcome::Absent));
    }

    #[test]
    fn classify_duplicates_use_membership() {
        // ABIDE holds a single E, yet all three guessed copies are reported.
        let feedback = Feedback::classify(&word("abide"), &word("eerie"));
        assert_eq!(feedback.encode(), "llilc");

        let feedback = Feedback::classify(&word("eager"), &word("geese"));
        assert_eq!(feedback.encode(), "lllil");
    }

    #[test]
    fn decode_round_trips_every_symbol_string() {
        let symbols = ['c', 'l', 'i'];
        // All 3^5 strings, reading `n` as a base-3 number
        for n in 0..243usize {
            let text: String = (0..5)
                .map(|position| symbols[n / 3usize.pow(position) % 3])
                .collect();
            let feedback = Feedback::decode(&text, 5).unwrap();
            assert_eq!(feedback.encode(), text);
            assert_eq!(feedback.len(), 5);
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            Feedback::decode("cli", 5),
            Err(FeedbackError::WrongLength {
                expected: 5,
                actual: 3
            })
        );
        assert!(Feedback::decode("", 5).is_err());
        assert!(Feedback::decode("cliicc", 5).is_err());
    }

    #[test]
    fn decode_rejects_unknown_symbol() {
        assert_eq!(
            Feedback::decode("cliq?", 5),
            Err(FeedbackError::InvalidSymbol {
                position: 3,
                symbol: 'q'
            })
        );
        assert!(Feedback::decode("CLIIC", 5).is_err());
    }

    #[test]
    fn decode_respects_configured_length() {
        assert!(Feedback::decode("cli", 3).is_ok());
        assert!(Feedback::decode("cliic", 3).is_err());
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::decode("cli", 3).unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜");
        assert_eq!(feedback.to_string(), "cli");
    }
}
