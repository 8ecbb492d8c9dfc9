//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::dictionary::DictionaryOracle;
use crate::game::Phase;
use crate::output::formatters::board_grid;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTER BOX")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn letter_style<O: DictionaryOracle + 'static>(app: &App<O>, letter: char) -> Style {
    let session = &app.ctx.session;
    let base = Style::default().add_modifier(Modifier::BOLD);

    if app.highlighted.contains(&letter) {
        base.fg(Color::White).bg(Color::Red)
    } else if session.candidate().last() == Some(letter) {
        base.fg(Color::Black).bg(Color::Yellow)
    } else if session.candidate().letters().contains(&letter) {
        base.fg(Color::Yellow)
    } else if session.state().has_used_letter(letter) {
        base.fg(Color::Green)
    } else {
        base.fg(Color::White)
    }
}

fn render_board<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in board_grid(app.ctx.session.board()) {
        let spans: Vec<Span> = row
            .into_iter()
            .map(|cell| match cell {
                Some(c) => Span::styled(format!(" {c} "), letter_style(app, c)),
                None => Span::raw("   "),
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Letters used gauge
            Constraint::Percentage(50), // Words
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let session = &app.ctx.session;
    let total = session.board().letter_count();
    let unused = session.state().unused_letters(session.board()).len();
    let used = total - unused;
    let percent = if total == 0 { 0 } else { used * 100 / total };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Letters Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent as u16)
        .label(format!("{used}/{total}"));

    f.render_widget(gauge, area);
}

fn render_words<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let words = app.ctx.session.state().used_words();
    let items: Vec<ListItem> = words
        .iter()
        .enumerate()
        .rev()
        .map(|(i, word)| ListItem::new(format!("{}. {word}", i + 1)))
        .collect();

    let title = format!(" Words ({}) ", words.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let session = &app.ctx.session;
    let (title, content, color) = match session.phase() {
        Phase::Submitted => (
            " Checking... | Esc to cancel ",
            session.pending_word().unwrap_or_default().to_string(),
            Color::Cyan,
        ),
        Phase::Idle | Phase::Building => {
            let title = match session.state().required_start() {
                Some(_) => " Next Word | Enter to play, Esc to clear ",
                None => " First Word | Enter to play, Esc to clear ",
            };
            (title, session.candidate().to_string(), Color::Yellow)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<O: DictionaryOracle + 'static>(f: &mut Frame, app: &App<O>, area: Rect) {
    let board = app.ctx.session.board().to_string();
    let help = format!("{board} | Ctrl-L: Clear | Ctrl-R: New Board | Esc Esc / Ctrl-C: Quit");

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
