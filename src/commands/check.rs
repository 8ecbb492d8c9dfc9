//! Check a chain of words against one board

use crate::core::Board;
use crate::dictionary::DictionaryOracle;
use crate::game::{Accepted, GameSession, Rejection};

/// What happened to one submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOutcome {
    pub word: String,
    pub result: Result<Accepted, Rejection>,
}

/// Result of playing a list of words in order
#[derive(Debug, Clone)]
pub struct ChainCheck {
    pub board: Board,
    pub outcomes: Vec<WordOutcome>,
    /// Accepted words in play order
    pub chain: Vec<String>,
    pub complete: bool,
}

impl ChainCheck {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }
}

/// Submit each word in turn; rejected words are skipped and play continues
pub async fn check_chain<O: DictionaryOracle>(
    session: &mut GameSession,
    words: &[String],
    oracle: &O,
) -> ChainCheck {
    let mut outcomes = Vec::with_capacity(words.len());

    for word in words {
        let result = session.submit_word(word, oracle).await;
        outcomes.push(WordOutcome {
            word: word.clone(),
            result,
        });
    }

    ChainCheck {
        board: session.board().clone(),
        outcomes,
        chain: session.state().used_words().to_vec(),
        complete: session.state().is_complete(session.board()),
    }
}
