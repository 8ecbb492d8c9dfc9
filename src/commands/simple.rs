//! Simple line-mode game
//!
//! Text-based play without the TUI. Lines starting with `:` are commands;
//! anything else is a word to submit, so every real word stays playable.

use super::GameContext;
use crate::dictionary::DictionaryOracle;
use crate::output::{write_board, write_outcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tokio::runtime::Handle;

const COMMAND_PREFIX: char = ':';

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    New,
    Clear,
    Help,
    Letters(String),
    Unknown(String),
    Submit(String),
    Empty,
}

impl SimpleCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix(COMMAND_PREFIX) else {
            return Self::Submit(line.to_string());
        };

        let (head, rest) = command
            .trim_start()
            .split_once(char::is_whitespace)
            .unwrap_or((command.trim_start(), ""));

        match head.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "clear" | "c" => Self::Clear,
            "help" | "h" | "" => Self::Help,
            "letters" | "l" if !rest.trim().is_empty() => {
                Self::Letters(rest.trim().to_string())
            }
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Run the line-mode game until `:quit` or end of input
///
/// Dictionary lookups run on `runtime`; each submission waits for its answer
/// before the next line is read.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<O, R, W>(
    ctx: &mut GameContext<O>,
    runtime: &Handle,
    mut input: R,
    out: &mut W,
) -> io::Result<()>
where
    O: DictionaryOracle,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", "Letter Box".bright_cyan().bold())?;
    write_help(out)?;
    write_board(out, ctx.session.board(), ctx.session.state())?;

    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match SimpleCommand::parse(&line) {
            SimpleCommand::Empty => {}
            SimpleCommand::Quit => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            SimpleCommand::Help => write_help(out)?,
            SimpleCommand::Unknown(text) => {
                writeln!(out, "{} Unknown command {text}", "✗".red().bold())?;
                write_help(out)?;
            }
            SimpleCommand::New => match ctx.restart() {
                Ok(()) => {
                    writeln!(out, "🔄 New board")?;
                    write_board(out, ctx.session.board(), ctx.session.state())?;
                }
                Err(e) => writeln!(out, "{} {e}", "✗".red().bold())?,
            },
            SimpleCommand::Clear => {
                ctx.session.clear_progress();
                writeln!(out, "Progress cleared")?;
                write_board(out, ctx.session.board(), ctx.session.state())?;
            }
            SimpleCommand::Letters(text) => match ctx.load_letters(&text) {
                Ok(()) => write_board(out, ctx.session.board(), ctx.session.state())?,
                Err(e) => writeln!(out, "{} {e}", "✗".red().bold())?,
            },
            SimpleCommand::Submit(word) => {
                let oracle = &*ctx.oracle;
                let outcome = runtime.block_on(ctx.session.submit_word(&word, oracle));
                write_outcome(out, &outcome, ctx.session.state().word_count())?;
                if outcome.is_ok() {
                    write_board(out, ctx.session.board(), ctx.session.state())?;
                }
            }
        }
    }
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Type a word and press Enter to play it.")?;
    writeln!(
        out,
        "Commands: ':new' for a new board, ':clear' to start over, \
         ':letters ABC-DEF-GHI-JKL' for your own board, ':quit' to exit"
    )
}
