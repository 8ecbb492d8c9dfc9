//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_chain_check, print_generated, print_stats, write_board, write_outcome};
pub use formatters::rejection_message;
