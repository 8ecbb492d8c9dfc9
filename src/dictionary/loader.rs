//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use std::fs;
use std::io;
use std::path::Path;

/// Normalise one word list entry
///
/// Returns `None` for blank lines, `#` comments and entries containing
/// anything other than ASCII letters. Accepted entries are lowercased.
#[must_use]
pub fn normalize_entry(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic())
        .then(|| trimmed.to_ascii_lowercase())
}

/// Load words from a file
///
/// Returns the valid entries, skipping anything [`normalize_entry`] rejects.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_box::dictionary::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_entry).collect())
}

/// Convert an embedded string slice to owned, normalised words
///
/// # Examples
/// ```
/// use letter_box::dictionary::loader::words_from_slice;
/// use letter_box::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().copied().filter_map(normalize_entry).collect()
}
