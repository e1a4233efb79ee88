//! Tile board view - one tile per stock.

use crate::services::Tile;
use crate::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;

use super::Theme;

/// Number of tiles per row.
pub(super) const COLUMNS: usize = 4;
/// Height of one tile in terminal rows.
const TILE_HEIGHT: u16 = 4;

/// Render the tile board.
///
/// Returns the screen area of each tile, in board order, for mouse hit
/// testing.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    app_state: &Arc<AppState>,
    theme: &Theme,
    selected: usize,
) -> Vec<Rect> {
    let tiles = app_state.reconciler.tiles();

    if tiles.is_empty() {
        let waiting = Paragraph::new("Waiting for the first quote batch...")
            .style(theme.muted())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Stocks")
                    .border_style(theme.border()),
            );
        frame.render_widget(waiting, area);
        return Vec::new();
    }

    let rows = tiles.len().div_ceil(COLUMNS);
    let mut constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(TILE_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut areas = Vec::with_capacity(tiles.len());
    for (row, row_tiles) in tiles.chunks(COLUMNS).enumerate() {
        let col_constraints: Vec<Constraint> = (0..COLUMNS)
            .map(|_| Constraint::Percentage((100 / COLUMNS) as u16))
            .collect();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(row_chunks[row]);

        for (col, tile) in row_tiles.iter().enumerate() {
            render_tile(frame, cols[col], tile, theme, areas.len() == selected);
            areas.push(cols[col]);
        }
    }

    areas
}

/// Render one tile: name in the border title, price with its direction glyph.
fn render_tile(frame: &mut Frame, area: Rect, tile: &Tile, theme: &Theme, selected: bool) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:.2}", tile.price), theme.price(tile.direction)),
            Span::raw(" "),
            Span::styled(tile.direction.glyph(), theme.glyph(tile.direction)),
        ]),
        Line::from(Span::styled(format!("[{}]", tile.id), theme.muted())),
    ];

    let border = if selected {
        theme.selected()
    } else {
        theme.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(tile.name.clone())
        .border_style(border);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
