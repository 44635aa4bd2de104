// ============================================================================
// Basic Usage Example
// ============================================================================

use data_processor::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    data_processor::utils::init_logging();

    println!("=== Data Processor Example ===\n");

    let processor = DataProcessorBuilder::new()
        .build(Arc::new(LoggingEventHandler))
        .expect("legacy configuration is valid");

    // Deterministic bell-shaped sample: sum of three uniform-ish sequences
    let sample: Vec<f64> = (0..10_000u64)
        .map(|i| {
            let u = |k: u64| ((i * k + 17) % 1000) as f64 / 1000.0;
            u(7919) + u(104_729) + u(1_299_709) - 1.5
        })
        .collect();

    println!("--- Statistics ---");
    let stats = processor.calculate_stats(&sample);
    println!(
        "Mean={:.4}, Median={:.4}, StdDev={:.4}",
        stats.mean, stats.median, stats.std_dev
    );

    let ladder = processor.calculate_percentiles(&sample);
    for p in [5, 25, 50, 75, 95] {
        if let Some(v) = ladder.at(p) {
            println!("  p{:>3} = {:.4}", p, v);
        }
    }

    let rolling = processor.calculate_rolling_mean(&sample, 1000);
    println!(
        "Rolling mean (window 1000), last value: {:.4}\n",
        rolling.last().copied().unwrap_or_default()
    );

    println!("--- Filtering ---");
    let summary = processor.filter_and_analyze(&sample, 0.5);
    println!(
        "Kept {} of {} values above {} ({:.1}%)",
        summary.filtered_len,
        summary.original_len,
        summary.threshold,
        summary.retained_fraction() * 100.0
    );
    if let Some(s) = summary.stats {
        println!(
            "Filtered: Mean={:.4}, Median={:.4}, StdDev={:.4}\n",
            s.mean, s.median, s.std_dev
        );
    }

    println!("--- Integration of x^2 on [0, 10] ---");
    let f = |x: f64| x * x;
    let n = 1_000_000;
    let exact = 1000.0 / 3.0;
    println!("Exact:     {:.6}", exact);
    for method in [
        QuadratureMethod::Rectangle,
        QuadratureMethod::Trapezoid,
        QuadratureMethod::Simpson,
    ] {
        match processor.integrate_with(method, f, 0.0, 10.0, n) {
            Ok(v) => println!("{:<10} {:.6} (error {:.2e})", method.as_str(), v, v - exact),
            Err(e) => println!("{:<10} failed: {}", method.as_str(), e),
        }
    }

    println!("\n--- pi/4 by the Leibniz series ---");
    let terms = 1_000_000;
    let quarter_pi = processor.sum_series(
        |k| {
            let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
            sign / (2 * k - 1) as f64
        },
        terms,
    );
    println!("Reference: {:.10}", std::f64::consts::FRAC_PI_4);
    println!("{} terms: {:.10}", terms, quarter_pi);

    println!("\n=== Example Complete ===");
}
