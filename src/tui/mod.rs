//! Terminal UI for the live price tile board.

mod app;
mod board;
mod chart;
pub mod events;
mod theme;

pub use app::{run_tui, App};
pub use theme::Theme;
