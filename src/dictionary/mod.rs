//! Dictionary oracles
//!
//! The game only needs a yes/no answer for each candidate word, delivered
//! asynchronously and allowed to fail. [`DictionaryOracle`] is that seam.
//! [`WordListDictionary`] answers from memory; [`RetryingOracle`] adds a
//! timeout and retries around any other oracle.

mod embedded;
pub mod loader;
mod retry;
#[cfg(test)]
pub(crate) mod testing;

pub use embedded::{WORDS, WORDS_COUNT};
pub use retry::{OracleConfig, RetryingOracle};

use rustc_hash::FxHashSet;
use std::future::Future;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Outcome of one dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The word is a dictionary entry
    Found,
    /// The dictionary answered and does not know the word
    NotFound,
    /// The dictionary could not answer; the lookup may be retried
    Unavailable(String),
}

/// An external word existence check
///
/// Queries are always lowercase.
pub trait DictionaryOracle: Send + Sync {
    fn lookup(&self, word: &str) -> impl Future<Output = Verdict> + Send;
}

impl<O: DictionaryOracle> DictionaryOracle for Arc<O> {
    fn lookup(&self, word: &str) -> impl Future<Output = Verdict> + Send {
        (**self).lookup(word)
    }
}

/// In-memory dictionary backed by a word list
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build from already-normalised lowercase words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Load a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::from_words)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn lookup(&self, word: &str) -> impl Future<Output = Verdict> + Send {
        let verdict = if self.contains(word) {
            Verdict::Found
        } else {
            Verdict::NotFound
        };
        std::future::ready(verdict)
    }
}
