//! Game rules and session state
//!
//! [`GameSession`] is the entry point. [`check_word`] and [`GameState`] are
//! exposed for callers that validate words without a session.

mod candidate;
mod rules;
mod session;
mod state;

pub use candidate::CandidateWord;
pub use rules::{Rejection, RejectionKind, RulesConfig, check_word, normalize_word};
pub use session::{Accepted, GameSession, Origin, PendingLookup, Phase, Ticket};
pub use state::GameState;
