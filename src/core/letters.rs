//! Letter membership sets
//!
//! A `LetterSet` packs membership of the 26 letters `a..=z` into one `u32`.

use std::fmt;

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a..=z");
        1 << (letter - b'a')
    }

    /// Build a set from the given letters
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        for &letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_new_letters() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'e'));
        assert!(!set.insert(b'e'));
        assert!(set.insert(b'a'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_letters_deduplicates() {
        let set = LetterSet::from_letters(b"speed");
        assert_eq!(set.len(), 4);
        assert!(set.contains(b's'));
        assert!(set.contains(b'e'));
        assert!(!set.contains(b'z'));
    }

    #[test]
    fn boundary_letters() {
        let set = LetterSet::from_letters(b"az");
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert_eq!(set.to_string(), "az");
    }

    #[test]
    fn iter_and_display_are_alphabetical() {
        let set = LetterSet::from_letters(b"range");
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aegnr".to_vec());
        assert_eq!(set.to_string(), "aegnr");
        assert!(LetterSet::EMPTY.is_empty());
    }
}
