use serde::{Deserialize, Serialize};

/// Color class for one chart point, relative to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointColor {
    /// First point of a series.
    Baseline,
    Rising,
    Falling,
}

/// Renderable description of one stock's line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    /// X axis labels: ordered observation timestamps.
    pub labels: Vec<String>,
    /// Y values: ordered observed prices.
    pub prices: Vec<f64>,
    /// Pointwise color classes, same length as `prices`.
    pub colors: Vec<PointColor>,
}

impl ChartSpec {
    /// Number of points in the chart.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the chart has no points.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Min/max price bounds for the y axis.
    ///
    /// A flat or single-point series gets one unit of padding so the axis
    /// still has extent; an empty chart gets (0.0, 1.0).
    pub fn price_bounds(&self) -> (f64, f64) {
        if self.prices.is_empty() {
            return (0.0, 1.0);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &price in &self.prices {
            min = min.min(price);
            max = max.max(price);
        }

        if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        }
    }
}
