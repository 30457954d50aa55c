//! Word list loading utilities
//!
//! Dictionaries are whitespace-separated tokens. Tokens that are not exactly
//! the configured number of ASCII letters are skipped, and repeated words
//! keep their first position so iteration order stays fixed.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_partition::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = load_from_str(&content, length);
    log::info!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse whitespace-separated words of `length` letters
///
/// # Examples
/// ```
/// use wordle_partition::wordlists::loader::load_from_str;
///
/// let words = load_from_str("abide abyss\neager x12yz learn\n\nrange abide", 5);
/// assert_eq!(words.len(), 5);
/// ```
#[must_use]
pub fn load_from_str(content: &str, length: usize) -> Vec<Word> {
    dedup(
        content
            .split_whitespace()
            .filter_map(|token| Word::with_length(token, length).ok()),
    )
}

/// Convert an embedded string slice to words of `length` letters
///
/// # Examples
/// ```
/// use wordle_partition::wordlists::loader::words_from_slice;
/// use wordle_partition::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY, 5);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    dedup(
        slice
            .iter()
            .filter_map(|&s| Word::with_length(s, length).ok()),
    )
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.filter(|word| seen.insert(word.clone())).collect()
}
