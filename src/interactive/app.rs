//! TUI application state and logic

use super::rendering;
use crate::core::{Board, BoardError, COLS};
use crate::solver::{EngineConfig, EngineEvent, Outcome, Progress, SuggestionEngine};
use crate::wordlists::WordCorpus;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a message stays on screen
const MESSAGE_TTL: Duration = Duration::from_secs(4);
/// Event poll interval, also the rate engine updates are drained at
const TICK: Duration = Duration::from_millis(50);

/// What the engine is doing for the newest board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Loading,
    Filtering(Progress),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub corpus: Arc<WordCorpus>,
    pub board: Board,
    /// Tile chosen for keyboard toggling
    pub selected: Option<(usize, usize)>,
    pub activity: Activity,
    /// Latest finished outcome
    pub outcome: Option<Outcome>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    engine: SuggestionEngine,
}

impl App {
    /// Create the app and request suggestions for the empty board
    #[must_use]
    pub fn new(corpus: Arc<WordCorpus>, config: EngineConfig) -> Self {
        let engine = SuggestionEngine::new(Arc::clone(&corpus), config);
        let mut app = Self {
            corpus,
            board: Board::new(),
            selected: None,
            activity: Activity::Idle,
            outcome: None,
            messages: Vec::new(),
            should_quit: false,
            engine,
        };
        app.add_message(
            "Type your guess and press enter, then click tiles (or Space) to set colors",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    fn refresh(&mut self) {
        self.engine.refresh(&self.board);
    }

    pub fn type_letter(&mut self, ch: char) {
        if self.board.type_letter(ch) {
            self.refresh();
        }
    }

    pub fn backspace(&mut self) {
        if self.board.backspace() {
            let resolved = self.resolved_rows();
            if self.selected.is_some_and(|(row, _)| row >= resolved) {
                self.selected = resolved.checked_sub(1).map(|row| (row, 0));
            }
            self.refresh();
        }
    }

    /// Submit the current row
    pub fn submit(&mut self) {
        let (row, _) = self.board.cursor();
        let corpus = Arc::clone(&self.corpus);
        match self.board.submit(|word| corpus.is_valid_guess(word)) {
            Ok(()) => {
                self.selected = Some((row, 0));
                self.refresh();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Cycle the color of a tile
    pub fn toggle(&mut self, row: usize, col: usize) {
        match self.board.toggle(row, col) {
            Ok(true) => {
                self.selected = Some((row, col));
                self.refresh();
            }
            Ok(false) => {}
            Err(err @ BoardError::NotSubmitted) => {
                self.add_message(&err.to_string(), MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some((row, col)) = self.selected {
            self.toggle(row, col);
        } else {
            self.add_message("Submit a guess first, then pick a tile", MessageStyle::Info);
        }
    }

    /// Move the tile selection within submitted rows
    pub fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let resolved = self.resolved_rows();
        if resolved == 0 {
            return;
        }
        let (row, col) = self.selected.unwrap_or((resolved - 1, 0));
        let row = row.saturating_add_signed(d_row).min(resolved - 1);
        let col = col.saturating_add_signed(d_col).min(COLS - 1);
        self.selected = Some((row, col));
    }

    /// Select the next submitted tile, wrapping to the first
    pub fn select_next(&mut self) {
        let resolved = self.resolved_rows();
        if resolved == 0 {
            return;
        }
        let next = match self.selected {
            Some((row, col)) => (row * COLS + col + 1) % (resolved * COLS),
            None => 0,
        };
        self.selected = Some((next / COLS, next % COLS));
    }

    fn resolved_rows(&self) -> usize {
        (0..crate::core::ROWS)
            .take_while(|&row| self.board.is_row_resolved(row))
            .count()
    }

    pub fn new_board(&mut self) {
        self.board = Board::new();
        self.selected = None;
        self.add_message("Board cleared", MessageStyle::Info);
        self.refresh();
    }

    /// Apply all pending engine updates
    pub fn pump_engine(&mut self) {
        while let Some(update) = self.engine.try_next() {
            self.apply(update.event);
        }
    }

    fn apply(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Loading => self.activity = Activity::Loading,
            EngineEvent::Progress(progress) => self.activity = Activity::Filtering(progress),
            EngineEvent::Finished(outcome) => {
                self.activity = Activity::Idle;
                match &outcome {
                    Outcome::Suggestions(s) if s.remaining == 1 => {
                        if let Some(stat) = s.ranking.lists().next().and_then(|(_, l)| l.first()) {
                            let text = format!("Only {} is left!", stat.word.to_uppercase());
                            self.add_message(&text, MessageStyle::Success);
                        }
                    }
                    Outcome::NoCandidates { reason } => {
                        let reason = reason.clone();
                        self.add_message(&reason, MessageStyle::Error);
                    }
                    Outcome::Suggestions(_) => {}
                }
                self.outcome = Some(outcome);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            shown_at: Instant::now(),
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop messages older than their time to live
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages
            .retain(|msg| now.saturating_duration_since(msg.shown_at) < MESSAGE_TTL);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_board(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left => self.move_selection(0, -1),
            KeyCode::Right => self.move_selection(0, 1),
            KeyCode::Up => self.move_selection(-1, 0),
            KeyCode::Down => self.move_selection(1, 0),
            KeyCode::Tab => self.select_next(),
            _ => {}
        }
    }

    /// Toggle the tile under a left click
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some((row, col)) = rendering::tile_at(screen, mouse.column, mouse.row)
        {
            self.toggle(row, col);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.pump_engine();
        app.expire_messages(Instant::now());
        terminal.draw(|f| rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
