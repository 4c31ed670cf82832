//! TUI rendering with ratatui
//!
//! The guess grid sits on the left; the four suggestion lists and the engine
//! gauge on the right.

use super::app::{Activity, App, MessageStyle};
use crate::core::{COLS, Cell, LetterState, ROWS};
use crate::solver::{Metric, Outcome, Suggestions};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
/// Board panel size including its border
const BOARD_WIDTH: u16 = COLS as u16 * (TILE_WIDTH + TILE_GAP) - TILE_GAP + 2;
const BOARD_HEIGHT: u16 = ROWS as u16 * TILE_HEIGHT + 2;

struct Areas {
    header: Rect,
    board: Rect,
    suggestions: Rect,
    messages: Rect,
    status: Rect,
}

fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(BOARD_HEIGHT), // Main content
            Constraint::Length(5),         // Messages
            Constraint::Length(1),         // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    let board = Rect {
        height: main[0].height.min(BOARD_HEIGHT),
        ..main[0]
    };

    Areas {
        header: chunks[0],
        board,
        suggestions: main[1],
        messages: chunks[2],
        status: chunks[3],
    }
}

fn tile_rect(board_inner: Rect, row: usize, col: usize) -> Rect {
    let (row, col) = (row as u16, col as u16);
    Rect::new(
        board_inner.x + col * (TILE_WIDTH + TILE_GAP),
        board_inner.y + row * TILE_HEIGHT,
        TILE_WIDTH,
        TILE_HEIGHT,
    )
    .intersection(board_inner)
}

/// Grid tile at a screen position, if any
#[must_use]
pub fn tile_at(screen: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let inner = board_block().inner(layout(screen).board);
    let position = Position::new(x, y);
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| (row, col)))
        .find(|&(row, col)| tile_rect(inner, row, col).contains(position))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let areas = layout(f.area());

    render_header(f, areas.header);
    render_board(f, app, areas.board);
    render_suggestions(f, app, areas.suggestions);
    render_messages(f, app, areas.messages);
    render_status(f, areas.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSIST")
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

fn board_block() -> Block<'static> {
    Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

const fn tile_colors(state: LetterState) -> (Color, Color) {
    match state {
        LetterState::Correct => (Color::Black, Color::Green),
        LetterState::Present => (Color::Black, Color::Yellow),
        LetterState::Absent => (Color::White, Color::DarkGray),
        LetterState::Pending => (Color::White, Color::Reset),
        LetterState::Empty => (Color::DarkGray, Color::Reset),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = board_block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (row, cells) in app.board.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let rect = tile_rect(inner, row, col);
            if !rect.is_empty() {
                render_tile(f, cell, app.selected == Some((row, col)), rect);
            }
        }
    }
}

fn render_tile(f: &mut Frame, cell: &Cell, selected: bool, area: Rect) {
    let (fg, bg) = tile_colors(cell.state);
    let letter = cell
        .letter
        .map_or(String::new(), |l| char::from(l.to_ascii_uppercase()).to_string());
    let border = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if selected {
                    BorderType::Double
                } else {
                    BorderType::Plain
                })
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_gauge(f, app, chunks[0]);

    // A superseded result is never shown while a refresh is running
    if app.activity != Activity::Idle {
        let paragraph = Paragraph::new("Working on the new board...").block(
            Block::default()
                .title(" Suggestions ")
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, chunks[1]);
        return;
    }

    match &app.outcome {
        Some(Outcome::Suggestions(suggestions)) => render_lists(f, suggestions, chunks[1]),
        Some(Outcome::NoCandidates { reason }) => {
            let paragraph = Paragraph::new(reason.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Suggestions ")
                        .borders(Borders::ALL),
                );
            f.render_widget(paragraph, chunks[1]);
        }
        None => {
            let paragraph = Paragraph::new("Loading word list...").block(
                Block::default()
                    .title(" Suggestions ")
                    .borders(Borders::ALL),
            );
            f.render_widget(paragraph, chunks[1]);
        }
    }
}

fn render_gauge(f: &mut Frame, app: &App, area: Rect) {
    let remaining = match &app.outcome {
        Some(Outcome::Suggestions(s)) => s.remaining,
        _ => 0,
    };

    let (ratio, label) = match app.activity {
        Activity::Idle => (1.0, format!("{remaining} possible answers")),
        Activity::Loading => (0.0, "Loading...".to_string()),
        Activity::Filtering(progress) => (
            progress.done as f64 / progress.total.max(1) as f64,
            format!("Filtering {}/{}", progress.done, progress.total),
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Engine ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);

    f.render_widget(gauge, area);
}

fn render_lists(f: &mut Frame, suggestions: &Suggestions, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row)
                .to_vec()
        })
        .collect();

    for (metric, rect) in Metric::ALL.into_iter().zip(cells) {
        let items: Vec<ListItem> = suggestions
            .ranking
            .top(metric)
            .iter()
            .map(|stat| {
                let mut spans = word_spans(&stat.word, &suggestions.locked);
                spans.push(Span::styled(
                    format!("  {}", metric.value(stat)),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!(" {} ", metric.label()))
                .borders(Borders::ALL),
        );
        f.render_widget(list, rect);
    }
}

/// Word letters with locked ones in green
fn word_spans(word: &str, locked: &[Option<u8>; COLS]) -> Vec<Span<'static>> {
    word.bytes()
        .enumerate()
        .map(|(col, letter)| {
            let text = char::from(letter.to_ascii_uppercase()).to_string();
            if locked.get(col).copied().flatten() == Some(letter) {
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(text)
            }
        })
        .collect()
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Submit | Click/Space: Color | ←↑↓→/Tab: Select | Ctrl-N: New | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
