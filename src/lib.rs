//! Tickerboard - terminal dashboard for a live stock-price feed

pub mod config;
pub mod error;
pub mod feed;
pub mod services;
pub mod tui;
pub mod types;

use std::sync::Arc;

/// Application state shared between the feed tasks and the TUI.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub store: Arc<services::SeriesStore>,
    pub reconciler: Arc<services::Reconciler>,
    pub connection: Arc<feed::ConnectionHandle>,
}

// Re-export commonly used types
pub use error::{FeedError, Result};
pub use services::{Reconciler, SeriesStore};
pub use types::*;
