//! Theme and color definitions for the TUI.

use crate::types::{Direction, PointColor};
use ratatui::style::{Color, Modifier, Style};

/// Theme for the TUI with consistent color scheme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub danger: Color,
    pub muted: Color,
    pub baseline: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            danger: Color::Red,
            muted: Color::DarkGray,
            baseline: Color::White,
            highlight: Color::Yellow,
        }
    }
}

impl Theme {
    /// Get style for titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for muted text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get style for borders.
    pub fn border(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Get style for the selected tile border.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for a price that just rose.
    pub fn price_up(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for a price that just fell.
    pub fn price_down(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for an unchanged price.
    pub fn price_flat(&self) -> Style {
        Style::default().fg(self.baseline)
    }

    /// Get style for a tile price by direction.
    pub fn price(&self, direction: Direction) -> Style {
        match direction {
            Direction::Up => self.price_up(),
            Direction::Down => self.price_down(),
            Direction::Flat => self.price_flat(),
        }
    }

    /// Get style for a direction glyph.
    pub fn glyph(&self, direction: Direction) -> Style {
        match direction {
            Direction::Up => self.price_up(),
            Direction::Down => self.price_down(),
            Direction::Flat => self.muted(),
        }
    }

    /// Get the color for a chart point class.
    pub fn point_color(&self, color: PointColor) -> Color {
        match color {
            PointColor::Baseline => self.baseline,
            PointColor::Rising => self.success,
            PointColor::Falling => self.danger,
        }
    }
}
