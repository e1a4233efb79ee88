pub mod chart;
pub mod reconciler;
pub mod series_store;

pub use chart::build_chart;
pub use reconciler::{tile_id, Reconciler, Tile};
pub use series_store::SeriesStore;
