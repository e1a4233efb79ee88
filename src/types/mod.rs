pub mod chart;
pub mod quote;
pub mod series;

pub use chart::*;
pub use quote::*;
pub use series::*;
