// ============================================================================
// Windowed Aggregate
// Rolling mean over a left-clamped window
// ============================================================================

/// Rolling mean where element `i` averages `data[max(0, i - window)..=i]`.
///
/// The window narrows near the left edge instead of padding, so every
/// output element is defined. `window = 0` returns the input unchanged.
///
/// # Example
/// ```
/// use data_processor::engine::calculate_rolling_mean;
///
/// let means = calculate_rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
/// assert_eq!(means, vec![1.0, 1.5, 2.0, 3.0, 4.0]);
/// ```
pub fn calculate_rolling_mean(data: &[f64], window: usize) -> Vec<f64> {
    (0..data.len())
        .map(|i| {
            let start = i.saturating_sub(window);
            let span = &data[start..=i];
            span.iter().fold(0.0, |acc, &x| acc + x) / span.len() as f64
        })
        .collect()
}
