// ============================================================================
// Engine Module
// Contains the numeric computations and the processor facade
// ============================================================================

mod elementwise;
mod order_stats;
mod processor;
mod rectangle;
mod rolling;
mod series;
mod simpson;
mod statistics;
mod trapezoid;

pub mod factory;

pub use elementwise::{filter, transform};
pub use factory::{create_from_config, DataProcessorBuilder};
pub use order_stats::{calculate_percentiles, sort_data};
pub use processor::DataProcessor;
pub use rectangle::RectangleRule;
pub use rolling::calculate_rolling_mean;
pub use series::{product_series, sum_series};
pub use simpson::SimpsonRule;
pub use statistics::{calculate_stats, calculate_stats_with};
pub use trapezoid::TrapezoidRule;
