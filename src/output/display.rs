//! Display functions for command results

use super::formatters::{board_grid, create_progress_bar, rejection_message};
use crate::commands::{ChainCheck, GenerationStats};
use crate::core::Board;
use crate::game::{Accepted, GameState, Rejection};
use crate::generator::Generated;
use colored::Colorize;
use std::io::{self, Write};

/// Draw the board, highlighting letters already used
///
/// # Errors
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, board: &Board, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for row in board_grid(board) {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Some(c) if state.has_used_letter(*c) => {
                    format!(" {} ", c.to_string().bright_green().bold())
                }
                Some(c) => format!(" {} ", c.to_string().bright_white().bold()),
                None => "   ".to_string(),
            })
            .collect();
        writeln!(out, "    {}", line.trim_end())?;
    }
    writeln!(out)?;

    if !state.used_words().is_empty() {
        writeln!(out, "  Words: {}", state.used_words().join(" → ").cyan())?;
    }
    if let Some(start) = state.required_start() {
        writeln!(
            out,
            "  Next word starts with {}",
            start.to_string().bright_yellow().bold()
        )?;
    }
    let unused = state.unused_letters(board);
    if !unused.is_empty() && !state.used_words().is_empty() {
        let unused: String = unused.iter().collect();
        writeln!(out, "  Unused: {}", unused.bright_black())?;
    }
    Ok(())
}

/// Report the outcome of one submission
///
/// # Errors
/// Returns any error from the writer.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<Accepted, Rejection>,
    words_played: usize,
) -> io::Result<()> {
    match outcome {
        Ok(accepted) if accepted.complete => {
            writeln!(out, "{} {}", "✓".green().bold(), accepted.word.green().bold())?;
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!("  🎉 Every letter used in {words_played} words!")
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{}", "═".repeat(50).bright_cyan())
        }
        Ok(accepted) => writeln!(
            out,
            "{} {}  next word starts with {}",
            "✓".green().bold(),
            accepted.word.green().bold(),
            accepted.next_start.to_string().bright_yellow().bold()
        ),
        Err(rejection) => writeln!(
            out,
            "{} {}",
            "✗".red().bold(),
            rejection_message(rejection).red()
        ),
    }
}

/// Print one generated board
pub fn print_generated(index: usize, generated: &Generated) {
    println!(
        "{:>4}. {}  {}",
        index + 1,
        generated.board.to_string().bright_white().bold(),
        format!(
            "(vowels {}, attempts {}/{})",
            generated.board.vowel_count(),
            generated.selection_attempts,
            generated.assignment_attempts
        )
        .bright_black()
    );
}

/// Print the result of checking a word chain
pub fn print_chain_check(check: &ChainCheck) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Board: {}", check.board.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for outcome in &check.outcomes {
        let label = format!("{:<12}", outcome.word.to_uppercase());
        match &outcome.result {
            Ok(accepted) => println!(
                "  {} {}  → {}",
                "✓".green().bold(),
                label.bright_white(),
                accepted.next_start
            ),
            Err(rejection) => println!(
                "  {} {}  {}",
                "✗".red().bold(),
                label.bright_white(),
                rejection_message(rejection).red()
            ),
        }
    }

    println!();
    println!(
        "Accepted {}/{}: {}",
        check.accepted(),
        check.outcomes.len(),
        check.chain.join(" → ")
    );
    if check.complete {
        println!("{}", "✅ Every letter used!".green().bold());
    }
}

/// Print generator statistics
pub fn print_stats(stats: &GenerationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Boards:".bright_cyan().bold());
    println!("   Requested:        {}", stats.boards);
    println!(
        "   Generated:        {}",
        stats.generated.to_string().bright_yellow().bold()
    );
    for (reason, count) in &stats.failures {
        println!("   Failed ({reason}): {}", count.to_string().red());
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    for (name, summary) in [("Selection", &stats.selection), ("Assignment", &stats.assignment)] {
        println!("\n🔁 {}", format!("{name} attempts:").bright_cyan().bold());
        println!("   Average:          {:.2}", summary.average);
        println!("   Worst case:       {}", summary.max.to_string().yellow());
        println!("   First try:        {}", summary.first_try.to_string().green());
    }

    if stats.generated == 0 {
        return;
    }

    println!("\n📈 {}", "Vowels per board:".bright_cyan().bold());
    for (&vowels, &count) in &stats.vowel_distribution {
        let pct = count as f64 / stats.generated as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {vowels}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
