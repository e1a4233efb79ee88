use serde::{Deserialize, Serialize};

/// One observed (time, price) point in a stock's history.
///
/// Entries are append-only: once recorded they are never mutated or removed
/// for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Local wall-clock time of the observation.
    pub timestamp: String,
    pub price: f64,
}
