// ============================================================================
// Data Processor Library
// Descriptive statistics, order statistics and quadrature over f64 data
// ============================================================================

//! # Data Processor
//!
//! A stateless numeric engine for finite samples and caller-supplied functions.
//!
//! ## Features
//!
//! - **Descriptive statistics**: mean, median, population standard deviation
//! - **Order statistics**: sorted copies and a 21-rung percentile ladder
//! - **Rolling mean** over a left-clamped window
//! - **Pluggable quadrature rules** (Rectangle, Trapezoid, Simpson)
//! - **Series** sums and products over 1..=n
//! - **Event hooks** for logging and auditing completed computations
//!
//! ## Example
//!
//! ```rust
//! use data_processor::prelude::*;
//! use std::sync::Arc;
//!
//! let processor = DataProcessorBuilder::new()
//!     .simpson_integration(SimpsonParity::RoundUpToEven)
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let stats = processor.calculate_stats(&[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.median, 2.5);
//!
//! let ladder = processor.calculate_percentiles(&[10.0, 20.0, 30.0, 40.0, 50.0]);
//! assert_eq!(ladder.at(50), Some(30.0));
//!
//! // ∫ x² on [0, 10]
//! let area = processor.integrate(|x| x * x, 0.0, 10.0).unwrap();
//! assert!((area - 1000.0 / 3.0).abs() < 1e-9);
//!
//! let five = processor.sum_series(|_| 1.0, 5);
//! assert_eq!(five, 5.0);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        FilteredSummary, PercentileLadder, ProcessorConfig, QuadratureMethod, SimpsonParity,
        StatSummary, VarianceFormula, DEFAULT_SUBDIVISIONS,
    };
    pub use crate::engine::{
        create_from_config, DataProcessor, DataProcessorBuilder, RectangleRule, SimpsonRule,
        TrapezoidRule,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, ProcessorEvent, QuadratureRule,
        SeriesKind,
    };
    pub use crate::numeric::{NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    fn legacy_processor() -> DataProcessor {
        create_from_config(ProcessorConfig::legacy(), Arc::new(NoOpEventHandler)).unwrap()
    }

    #[test]
    fn test_empty_sample_conventions_differ() {
        let processor = legacy_processor();

        // Statistics degenerate to a zero triple, percentiles to nothing
        assert_eq!(processor.calculate_stats(&[]).as_array(), [0.0, 0.0, 0.0]);
        assert!(processor.calculate_percentiles(&[]).is_empty());
        assert!(processor.calculate_rolling_mean(&[], 3).is_empty());
    }

    #[test]
    fn test_end_to_end_analysis() {
        let processor = legacy_processor();
        let sample: Vec<f64> = (1..=100).map(|i| ((i * 7919) % 101) as f64).collect();

        let stats = processor.calculate_stats(&sample);
        let sorted = processor.sort_data(&sample);
        let ladder = processor.calculate_percentiles(&sample);

        assert_eq!(sorted.first().copied(), ladder.min());
        assert_eq!(sorted.last().copied(), ladder.max());
        assert!(ladder.median().unwrap() <= stats.median);
        assert!((stats.mean - 50.5).abs() < 1e-12);

        let scaled = processor.transform(&sample, 2.0);
        let scaled_stats = processor.calculate_stats(&scaled);
        assert!((scaled_stats.mean - 2.0 * stats.mean).abs() < 1e-9);
        assert!((scaled_stats.std_dev - 2.0 * stats.std_dev).abs() < 1e-9);

        let upper = processor.filter_and_analyze(&sample, stats.median);
        assert_eq!(upper.filtered_len, 50);
        assert!(upper.stats.unwrap().mean > stats.mean);
    }

    #[test]
    fn test_rules_converge_on_smooth_integrand() {
        let processor = legacy_processor();
        let exact = 2.0;

        let rect = processor.integrate_rectangle(f64::sin, 0.0, std::f64::consts::PI, 1000);
        let trap = processor.integrate_trapezoid(f64::sin, 0.0, std::f64::consts::PI, 1000);
        let simp = processor.integrate_simpson(f64::sin, 0.0, std::f64::consts::PI, 1000);

        let rect_err = (rect.unwrap() - exact).abs();
        let trap_err = (trap.unwrap() - exact).abs();
        let simp_err = (simp.unwrap() - exact).abs();

        assert!(rect_err < 1e-5);
        assert!(trap_err < 1e-5);
        assert!(simp_err < rect_err && simp_err < trap_err);
        assert!(simp_err < 1e-11);
    }
}
