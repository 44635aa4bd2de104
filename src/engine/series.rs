// ============================================================================
// Series Engine
// Sums and products of a term function over 1..=n
// ============================================================================

/// Σ term(i) for i = 1..=n, accumulated left to right.
///
/// `n < 1` is an empty range and yields 0.0.
///
/// # Example
/// ```
/// use data_processor::engine::sum_series;
///
/// // Leibniz: 1 - 1/3 + 1/5 - ... → π/4
/// let quarter_pi = sum_series(|k| (if k % 2 == 1 { 1.0 } else { -1.0 }) / (2 * k - 1) as f64, 100_000);
/// assert!((quarter_pi - std::f64::consts::FRAC_PI_4).abs() < 1e-5);
/// ```
pub fn sum_series<F>(term: F, n: i64) -> f64
where
    F: Fn(i64) -> f64,
{
    (1..=n).fold(0.0, |acc, i| acc + term(i))
}

/// Π term(i) for i = 1..=n, starting from 1.0.
///
/// `n < 1` is an empty range and yields 1.0.
pub fn product_series<F>(term: F, n: i64) -> f64
where
    F: Fn(i64) -> f64,
{
    (1..=n).fold(1.0, |acc, i| acc * term(i))
}
