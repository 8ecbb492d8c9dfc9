//! TUI application state and logic

use crate::commands::GameContext;
use crate::dictionary::{DictionaryOracle, Verdict};
use crate::game::{Phase, Rejection, Ticket};
use crate::output::rejection_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const MAX_MESSAGES: usize = 5;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<O> {
    pub ctx: GameContext<O>,
    pub messages: Vec<Message>,
    /// Letters to flash after a rejection
    pub highlighted: Vec<char>,
    pub should_quit: bool,
    quit_armed: bool,
    runtime: Handle,
    lookup: Option<JoinHandle<()>>,
    verdict_tx: mpsc::UnboundedSender<(Ticket, Verdict)>,
    verdict_rx: mpsc::UnboundedReceiver<(Ticket, Verdict)>,
}

impl<O: DictionaryOracle + 'static> App<O> {
    #[must_use]
    pub fn new(ctx: GameContext<O>, runtime: Handle) -> Self {
        let (verdict_tx, verdict_rx) = mpsc::unbounded_channel();
        Self {
            ctx,
            messages: vec![Message {
                text: "Type letters to build a word, Enter to play it.".to_string(),
                style: MessageStyle::Info,
            }],
            highlighted: Vec::new(),
            should_quit: false,
            quit_armed: false,
            runtime,
            lookup: None,
            verdict_tx,
            verdict_rx,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn reject(&mut self, rejection: &Rejection) {
        self.highlighted = rejection.offending_letters();
        self.add_message(&rejection_message(rejection), MessageStyle::Error);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let quit_armed = std::mem::take(&mut self.quit_armed);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.clear_progress(),
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Char(c) if !ctrl => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.escape(quit_armed),
            _ => {}
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        match self.ctx.session.select_letter(letter) {
            Ok(()) => self.highlighted.clear(),
            Err(rejection) => self.reject(&rejection),
        }
    }

    pub fn delete_letter(&mut self) {
        if let Err(rejection) = self.ctx.session.delete_last_letter() {
            self.reject(&rejection);
        }
    }

    /// Send the built word to the dictionary on a background task
    pub fn submit(&mut self) {
        let pending = match self.ctx.session.begin_candidate_submission() {
            Ok(pending) => pending,
            Err(rejection) => {
                self.reject(&rejection);
                return;
            }
        };

        self.highlighted.clear();
        self.add_message(
            &format!("Checking {}...", pending.word()),
            MessageStyle::Info,
        );

        let oracle = Arc::clone(&self.ctx.oracle);
        let tx = self.verdict_tx.clone();
        let ticket = pending.ticket();
        let query = pending.query();

        self.lookup = Some(self.runtime.spawn(async move {
            let verdict = oracle.lookup(&query).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send((ticket, verdict));
        }));
    }

    /// Apply any dictionary answers that have arrived
    pub fn poll_verdicts(&mut self) {
        while let Ok((ticket, verdict)) = self.verdict_rx.try_recv() {
            self.apply_verdict(ticket, verdict);
        }
    }

    fn apply_verdict(&mut self, ticket: Ticket, verdict: Verdict) {
        match self.ctx.session.complete_submission(ticket, verdict) {
            Ok(accepted) => {
                self.lookup = None;
                if accepted.complete {
                    let count = self.ctx.session.state().word_count();
                    self.add_message(
                        &format!("🎉 {} completes the board in {count} words!", accepted.word),
                        MessageStyle::Success,
                    );
                    self.add_message("Ctrl-R for a new board.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("{} accepted", accepted.word),
                        MessageStyle::Success,
                    );
                }
            }
            // Answer to a word the player already abandoned
            Err(Rejection::StaleVerdict) => {}
            Err(rejection) => {
                self.lookup = None;
                self.reject(&rejection);
            }
        }
    }

    fn abort_lookup(&mut self) {
        if let Some(task) = self.lookup.take() {
            task.abort();
        }
    }

    /// Clear the word being built, or quit on a second press with nothing to clear
    pub fn escape(&mut self, quit_armed: bool) {
        if self.ctx.session.phase() == Phase::Idle {
            if quit_armed {
                self.should_quit = true;
            } else {
                self.quit_armed = true;
                self.add_message("Press Esc again to quit.", MessageStyle::Info);
            }
            return;
        }

        self.abort_lookup();
        self.ctx.session.clear_candidate();
        self.highlighted.clear();
    }

    pub fn clear_progress(&mut self) {
        self.abort_lookup();
        self.ctx.session.clear_progress();
        self.highlighted.clear();
        self.add_message("Progress cleared.", MessageStyle::Info);
    }

    pub fn restart(&mut self) {
        match self.ctx.restart() {
            Ok(()) => {
                self.abort_lookup();
                self.highlighted.clear();
                self.messages.clear();
                self.add_message("New board!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<O: DictionaryOracle + 'static>(app: App<O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, O>(terminal: &mut Terminal<B>, mut app: App<O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    O: DictionaryOracle + 'static,
{
    loop {
        app.poll_verdicts();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            app.abort_lookup();
            break;
        }
    }

    Ok(())
}
