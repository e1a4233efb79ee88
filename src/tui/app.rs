//! Main TUI application logic.

use super::{board, chart, events, Theme};
use crate::services::build_chart;
use crate::AppState;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{io, sync::Arc};

/// Main TUI application.
pub struct App {
    /// Application state.
    app_state: Arc<AppState>,
    /// Theme.
    theme: Theme,
    /// Should quit.
    should_quit: bool,
    /// Index of the selected tile on the board.
    selected: usize,
    /// Stock name whose chart overlay is open, if any. Only one overlay
    /// exists at a time; opening another replaces it.
    overlay: Option<String>,
    /// Screen areas of the tiles from the last render, for hit testing.
    tile_areas: Vec<Rect>,
    /// Modal area from the last render while the overlay is open.
    overlay_area: Option<Rect>,
}

impl App {
    /// Create a new TUI application.
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self {
            app_state,
            theme: Theme::default(),
            should_quit: false,
            selected: 0,
            overlay: None,
            tile_areas: Vec::new(),
            overlay_area: None,
        }
    }

    /// Handle an event.
    pub fn handle_event(&mut self, event: events::Event) {
        match event {
            events::Event::Key(key) => self.handle_key(key),
            events::Event::Mouse(mouse) => self.handle_mouse(mouse),
            events::Event::Tick => {
                // Periodic update handled by render
            }
            events::Event::Resize(_, _) => {
                // Terminal will handle resize automatically
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if events::is_quit(&key) {
            self.should_quit = true;
            return;
        }

        if self.overlay.is_some() {
            // Esc is the explicit close control.
            if events::is_key(&key, KeyCode::Esc) {
                self.close_overlay();
            }
            return;
        }

        let count = self.app_state.reconciler.tile_count();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(board::COLUMNS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.selected = (self.selected + board::COLUMNS).min(count - 1);
                }
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let click = (mouse.column, mouse.row);

        if self.overlay.is_some() {
            // Clicks on the background region dismiss the overlay; clicks
            // inside the modal content do not.
            if let Some(modal) = self.overlay_area {
                if !contains(modal, click) {
                    self.close_overlay();
                }
            }
            return;
        }

        if let Some(index) = self.tile_areas.iter().position(|area| contains(*area, click)) {
            self.selected = index;
            self.open_selected();
        }
    }

    /// Open the chart overlay for the selected tile.
    pub fn open_selected(&mut self) {
        let tiles = self.app_state.reconciler.tiles();
        if let Some(tile) = tiles.get(self.selected) {
            self.overlay = Some(tile.name.clone());
        }
    }

    /// Close the chart overlay.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
        self.overlay_area = None;
    }

    /// Stock name of the open overlay, if any.
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// Index of the selected tile.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the TUI.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Tile board
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        let count = self.app_state.reconciler.tile_count();
        if count > 0 && self.selected >= count {
            self.selected = count - 1;
        }

        self.tile_areas =
            board::render(frame, chunks[0], &self.app_state, &self.theme, self.selected);
        self.render_status_bar(frame, chunks[1]);

        if let Some(ref name) = self.overlay {
            let spec = build_chart(name, &self.app_state.store.history(name));
            let modal = chart::modal_area(area);
            chart::render(frame, modal, &spec, &self.theme);
            self.overlay_area = Some(modal);
        }
    }

    /// Render status bar.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (status, style) = if self.app_state.connection.is_connected() {
            ("● Connected", self.theme.price_up())
        } else {
            ("○ Disconnected", self.theme.muted())
        };

        let text = Line::from(vec![
            Span::styled("Tickerboard", self.theme.title()),
            Span::raw(" | "),
            Span::styled(status, style),
            Span::raw(" | "),
            Span::styled("↑↓←→", self.theme.muted()),
            Span::raw(" select | "),
            Span::styled("Enter/click", self.theme.muted()),
            Span::raw(" chart | "),
            Span::styled("Esc", self.theme.muted()),
            Span::raw(" close | "),
            Span::styled("q", self.theme.muted()),
            Span::raw(" quit"),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        frame.render_widget(block, area);

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        frame.render_widget(Paragraph::new(text), inner);
    }
}

fn contains(area: Rect, (x, y): (u16, u16)) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Run the TUI application.
pub async fn run_tui(app_state: Arc<AppState>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and event handler
    let mut app = App::new(app_state.clone());
    let mut event_handler = events::EventHandler::new(app_state.config.tick_rate);

    // Main loop
    loop {
        // Render
        terminal.draw(|f| app.render(f))?;

        // Handle events
        if let Some(event) = event_handler.next().await {
            app.handle_event(event);
        }

        // Check if should quit
        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}
