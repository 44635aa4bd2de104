// ============================================================================
// Elementwise Operations
// Scaling and threshold filtering, order preserving
// ============================================================================

/// `result[i] = data[i] * factor`
pub fn transform(data: &[f64], factor: f64) -> Vec<f64> {
    data.iter().map(|&x| x * factor).collect()
}

/// Keeps the elements strictly greater than `threshold`, in input order
pub fn filter(data: &[f64], threshold: f64) -> Vec<f64> {
    data.iter().copied().filter(|&x| x > threshold).collect()
}
