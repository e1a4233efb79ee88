use crate::types::{ChartSpec, PointColor, SeriesEntry};

/// Build a renderable chart description from a stock's series snapshot.
///
/// X axis carries the ordered timestamps, y the ordered prices. The first
/// point is the neutral baseline; every later point is Rising when its price
/// is strictly greater than the immediately preceding point and Falling
/// otherwise. An empty series yields a valid empty spec. The result depends
/// only on the snapshot, so building it twice gives identical output.
pub fn build_chart(name: &str, entries: &[SeriesEntry]) -> ChartSpec {
    let labels: Vec<String> = entries.iter().map(|e| e.timestamp.clone()).collect();
    let prices: Vec<f64> = entries.iter().map(|e| e.price).collect();

    let colors: Vec<PointColor> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            if i == 0 {
                PointColor::Baseline
            } else if *price > prices[i - 1] {
                PointColor::Rising
            } else {
                PointColor::Falling
            }
        })
        .collect();

    ChartSpec {
        title: format!("{} price history", name),
        labels,
        prices,
        colors,
    }
}
