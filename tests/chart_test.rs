//! Unit tests for the chart presenter

use tickerboard::services::build_chart;
use tickerboard::types::{PointColor, SeriesEntry};

fn entry(timestamp: &str, price: f64) -> SeriesEntry {
    SeriesEntry {
        timestamp: timestamp.to_string(),
        price,
    }
}

#[test]
fn test_empty_series_yields_valid_empty_chart() {
    let spec = build_chart("Acme", &[]);

    assert!(spec.is_empty());
    assert_eq!(spec.len(), 0);
    assert!(spec.labels.is_empty());
    assert!(spec.colors.is_empty());
    assert_eq!(spec.price_bounds(), (0.0, 1.0));
}

#[test]
fn test_axes_follow_series_order() {
    let entries = vec![
        entry("10:00:00", 10.0),
        entry("10:00:05", 12.0),
        entry("10:00:10", 11.0),
    ];

    let spec = build_chart("Acme", &entries);

    assert_eq!(spec.labels, vec!["10:00:00", "10:00:05", "10:00:10"]);
    assert_eq!(spec.prices, vec![10.0, 12.0, 11.0]);
    assert_eq!(spec.title, "Acme price history");
}

#[test]
fn test_first_point_is_baseline() {
    let spec = build_chart("Acme", &[entry("10:00:00", 10.0)]);

    assert_eq!(spec.colors, vec![PointColor::Baseline]);
}

#[test]
fn test_pointwise_colors_follow_local_trend() {
    let entries = vec![
        entry("10:00:00", 10.0),
        entry("10:00:05", 12.0), // rose
        entry("10:00:10", 11.0), // fell
        entry("10:00:15", 11.0), // unchanged counts as falling color
        entry("10:00:20", 11.5), // rose
    ];

    let spec = build_chart("Acme", &entries);

    assert_eq!(
        spec.colors,
        vec![
            PointColor::Baseline,
            PointColor::Rising,
            PointColor::Falling,
            PointColor::Falling,
            PointColor::Rising,
        ]
    );
}

#[test]
fn test_build_is_idempotent_for_a_snapshot() {
    let entries = vec![entry("10:00:00", 10.0), entry("10:00:05", 9.0)];

    let first = build_chart("Acme", &entries);
    let second = build_chart("Acme", &entries);

    assert_eq!(first, second);
}

#[test]
fn test_price_bounds_span_the_series() {
    let entries = vec![
        entry("10:00:00", 10.0),
        entry("10:00:05", 14.0),
        entry("10:00:10", 8.0),
    ];

    let spec = build_chart("Acme", &entries);

    assert_eq!(spec.price_bounds(), (8.0, 14.0));
}

#[test]
fn test_flat_series_bounds_get_padding() {
    let entries = vec![entry("10:00:00", 10.0), entry("10:00:05", 10.0)];

    let spec = build_chart("Acme", &entries);

    assert_eq!(spec.price_bounds(), (9.0, 11.0));
}
