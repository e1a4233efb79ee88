use crate::types::{Direction, SeriesEntry};
use dashmap::DashMap;
use std::sync::Arc;

/// Accumulated state for one stock name.
#[derive(Debug, Clone, Default)]
struct StockSeries {
    /// Most recently observed price; None until first sighting.
    last_price: Option<f64>,
    /// Append-only observation history.
    entries: Vec<SeriesEntry>,
}

/// Process-wide store of last prices and observation histories.
///
/// Keys are exact stock names: case-sensitive and whitespace-significant.
/// Entries are created on first sighting and live until the process exits;
/// nothing is ever removed.
pub struct SeriesStore {
    series: DashMap<String, StockSeries>,
}

impl SeriesStore {
    /// Create a new, empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            series: DashMap::new(),
        })
    }

    /// Record one observation for a stock and return the direction of the
    /// change relative to the previously recorded price.
    ///
    /// A first sighting is Flat. The last price is always overwritten and
    /// one entry is always appended, even when the price did not move.
    pub fn record(&self, name: &str, price: f64, timestamp: &str) -> Direction {
        let mut entry = self.series.entry(name.to_string()).or_default();
        let series = entry.value_mut();

        let direction = match series.last_price {
            Some(last) if price > last => Direction::Up,
            Some(last) if price < last => Direction::Down,
            Some(_) => Direction::Flat,
            None => Direction::Flat,
        };

        series.last_price = Some(price);
        series.entries.push(SeriesEntry {
            timestamp: timestamp.to_string(),
            price,
        });

        direction
    }

    /// Last recorded price for a name, if it was ever seen.
    pub fn last_price(&self, name: &str) -> Option<f64> {
        self.series.get(name)?.last_price
    }

    /// Snapshot of the full history for a name. Empty if never seen.
    pub fn history(&self, name: &str) -> Vec<SeriesEntry> {
        self.series
            .get(name)
            .map(|entry| entry.entries.clone())
            .unwrap_or_default()
    }

    /// Number of recorded observations for a name.
    pub fn history_len(&self, name: &str) -> usize {
        self.series.get(name).map(|entry| entry.entries.len()).unwrap_or(0)
    }

    /// Number of distinct stock names ever seen.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if no stock has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
