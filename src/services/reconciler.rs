use crate::services::SeriesStore;
use crate::types::{Direction, StockQuote};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Derive a tile id from a stock name: each whitespace run becomes one
/// hyphen, everything lower-cased.
///
/// The derivation is stable (same name, same id) and leaves no whitespace
/// behind, so re-deriving an id is the identity. Distinct names can collide
/// ("AB C" and "AB-C"); collisions are detected and logged during
/// reconciliation rather than rejected.
pub fn tile_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
        } else {
            id.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    id
}

/// One visible tile on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Derived lookup id.
    pub id: String,
    /// Exact stock name as received.
    pub name: String,
    /// Latest observed price.
    pub price: f64,
    /// Direction of the most recent update.
    pub direction: Direction,
}

/// Reconciles inbound quote batches against the tile board and series store.
///
/// All mutation happens through `apply_batch`, which the binary calls from a
/// single dedicated consumer task; batches are applied to completion in
/// arrival order.
pub struct Reconciler {
    store: Arc<SeriesStore>,
    tiles: RwLock<Vec<Tile>>,
    initialized: AtomicBool,
}

impl Reconciler {
    /// Create a reconciler backed by the given store.
    pub fn new(store: Arc<SeriesStore>) -> Arc<Self> {
        Arc::new(Self {
            store,
            tiles: RwLock::new(Vec::new()),
            initialized: AtomicBool::new(false),
        })
    }

    /// Apply one batch of quotes in arrival order.
    ///
    /// The first batch ever received bulk-creates the board. Afterwards each
    /// quote either patches its existing tile (up/down/flat against the last
    /// recorded price) or, for a name never seen before, creates a new tile
    /// in place. Repeated names within a batch are each processed against
    /// the immediately preceding recorded price.
    pub fn apply_batch(&self, quotes: &[StockQuote]) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let first_batch = !self.initialized.swap(true, Ordering::SeqCst);
        if first_batch {
            info!(count = quotes.len(), "first batch received, creating tile board");
        }

        let mut tiles = self.tiles.write().unwrap_or_else(|e| e.into_inner());

        for quote in quotes {
            let id = tile_id(&quote.name);
            match tiles.iter_mut().find(|tile| tile.id == id) {
                Some(tile) => {
                    if tile.name != quote.name {
                        warn!(
                            tile = %id,
                            existing = %tile.name,
                            incoming = %quote.name,
                            "tile id collision between distinct names"
                        );
                    }
                    let direction = self.store.record(&quote.name, quote.price, &timestamp);
                    tile.price = quote.price;
                    tile.direction = direction;
                    debug!(stock = %quote.name, price = quote.price, %direction, "tile updated");
                }
                None => {
                    self.store.record(&quote.name, quote.price, &timestamp);
                    tiles.push(Tile {
                        id,
                        name: quote.name.clone(),
                        price: quote.price,
                        direction: Direction::Flat,
                    });
                    if !first_batch {
                        info!(stock = %quote.name, "created tile for unseen stock");
                    }
                }
            }
        }
    }

    /// Snapshot of the current tile board in creation order.
    pub fn tiles(&self) -> Vec<Tile> {
        self.tiles.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.tiles.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the first batch has been applied.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Shared series store backing the board.
    pub fn store(&self) -> &Arc<SeriesStore> {
        &self.store
    }
}
