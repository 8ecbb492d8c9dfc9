//! Command implementations

pub mod check;
mod context;
pub mod generate;
pub mod simple;
pub mod stats;

pub use check::{ChainCheck, WordOutcome, check_chain};
pub use context::GameContext;
pub use generate::generate_boards;
pub use simple::{SimpleCommand, run_simple};
pub use stats::{AttemptSummary, GenerationStats, run_stats};
