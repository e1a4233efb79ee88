//! Unit tests for tile id derivation and batch reconciliation

use tickerboard::services::{tile_id, Reconciler, SeriesStore};
use tickerboard::types::{Direction, StockQuote};

fn quote(name: &str, price: f64) -> StockQuote {
    StockQuote {
        name: name.to_string(),
        price,
    }
}

// =========================================================================
// Tile id derivation
// =========================================================================

#[test]
fn test_tile_id_lowercases_and_hyphenates() {
    assert_eq!(tile_id("Acme Corp"), "acme-corp");
    assert_eq!(tile_id("ACME"), "acme");
}

#[test]
fn test_tile_id_collapses_whitespace_runs() {
    assert_eq!(tile_id("Acme   Corp"), "acme-corp");
    assert_eq!(tile_id("Acme \t Corp"), "acme-corp");
}

#[test]
fn test_tile_id_is_stable() {
    let first = tile_id("Globex Holdings");
    let second = tile_id("Globex Holdings");
    assert_eq!(first, second);
}

#[test]
fn test_tile_id_of_derived_id_is_identity() {
    let id = tile_id("Acme Corp");
    assert_eq!(tile_id(&id), id);
}

#[test]
fn test_tile_id_distinct_names_can_collide() {
    assert_eq!(tile_id("AB C"), tile_id("AB-C"));
}

// =========================================================================
// Batch reconciliation
// =========================================================================

#[test]
fn test_single_quote_creates_one_tile() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());

    reconciler.apply_batch(&[quote("Acme", 10.0)]);

    let tiles = reconciler.tiles();
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].id, "acme");
    assert_eq!(tiles[0].name, "Acme");
    assert_eq!(tiles[0].price, 10.0);
    assert_eq!(tiles[0].direction, Direction::Flat);
    assert_eq!(store.last_price("Acme"), Some(10.0));
    assert_eq!(store.history_len("Acme"), 1);
}

#[test]
fn test_first_batch_bulk_creates_in_order() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());
    assert!(!reconciler.is_initialized());

    reconciler.apply_batch(&[quote("Acme", 10.0), quote("Globex", 20.0), quote("Initech", 5.0)]);

    assert!(reconciler.is_initialized());
    let tiles = reconciler.tiles();
    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles[0].name, "Acme");
    assert_eq!(tiles[1].name, "Globex");
    assert_eq!(tiles[2].name, "Initech");
    assert_eq!(store.len(), 3);
}

#[test]
fn test_update_marks_direction_up() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());
    reconciler.apply_batch(&[quote("Acme", 10.0)]);

    reconciler.apply_batch(&[quote("Acme", 12.5)]);

    let tiles = reconciler.tiles();
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].price, 12.5);
    assert_eq!(tiles[0].direction, Direction::Up);
    assert_eq!(store.last_price("Acme"), Some(12.5));
    assert_eq!(store.history_len("Acme"), 2);
}

#[test]
fn test_update_marks_direction_down_then_flat() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());
    reconciler.apply_batch(&[quote("Acme", 10.0)]);

    reconciler.apply_batch(&[quote("Acme", 9.0)]);
    assert_eq!(reconciler.tiles()[0].direction, Direction::Down);

    reconciler.apply_batch(&[quote("Acme", 9.0)]);
    assert_eq!(reconciler.tiles()[0].direction, Direction::Flat);
    assert_eq!(store.history_len("Acme"), 3);
}

#[test]
fn test_unseen_name_after_first_batch_creates_tile() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());
    reconciler.apply_batch(&[quote("Acme", 10.0)]);

    reconciler.apply_batch(&[quote("Acme", 10.5), quote("Globex", 20.0)]);

    let tiles = reconciler.tiles();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[1].name, "Globex");
    assert_eq!(tiles[1].direction, Direction::Flat);
    assert_eq!(store.history_len("Globex"), 1);
}

#[test]
fn test_repeated_name_within_batch_processed_in_order() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());
    reconciler.apply_batch(&[quote("Acme", 10.0)]);

    // Each repeat compares against the immediately preceding recorded price.
    reconciler.apply_batch(&[quote("Acme", 12.0), quote("Acme", 11.0)]);

    let tiles = reconciler.tiles();
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].price, 11.0);
    assert_eq!(tiles[0].direction, Direction::Down);
    assert_eq!(store.history_len("Acme"), 3);
}

#[test]
fn test_latest_price_shown_across_batches() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());

    reconciler.apply_batch(&[quote("Acme", 10.0), quote("Globex", 20.0)]);
    reconciler.apply_batch(&[quote("Globex", 19.0)]);
    reconciler.apply_batch(&[quote("Acme", 10.2), quote("Globex", 19.4)]);

    let tiles = reconciler.tiles();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].price, 10.2);
    assert_eq!(tiles[1].price, 19.4);
    assert_eq!(store.last_price("Acme"), Some(10.2));
    assert_eq!(store.last_price("Globex"), Some(19.4));
}

#[test]
fn test_colliding_names_share_a_tile_but_not_a_series() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());
    reconciler.apply_batch(&[quote("AB C", 10.0)]);

    reconciler.apply_batch(&[quote("AB-C", 20.0)]);

    // One tile (same derived id), two independent series.
    assert_eq!(reconciler.tile_count(), 1);
    assert_eq!(reconciler.tiles()[0].price, 20.0);
    assert_eq!(store.last_price("AB C"), Some(10.0));
    assert_eq!(store.last_price("AB-C"), Some(20.0));
}

#[test]
fn test_empty_batch_still_initializes() {
    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store);

    reconciler.apply_batch(&[]);

    assert!(reconciler.is_initialized());
    assert_eq!(reconciler.tile_count(), 0);
}
