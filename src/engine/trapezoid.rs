// ============================================================================
// Trapezoid Rule
// Endpoints weighted 1/2, interior nodes weighted 1
// ============================================================================

use crate::domain::QuadratureMethod;
use crate::interfaces::QuadratureRule;
use crate::numeric::NumericResult;

/// Composite trapezoid rule
///
/// ```text
/// width  = (b - a) / n
/// result = width * (0.5 * (f(a) + f(b)) + Σ f(a + i * width)),  i = 1..n-1
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidRule;

impl TrapezoidRule {
    pub fn new() -> Self {
        Self
    }
}

impl QuadratureRule for TrapezoidRule {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> NumericResult<f64> {
        let n = self.effective_subdivisions(n)?;
        let width = (b - a) / n as f64;

        let sum = (1..n).fold(0.5 * (f(a) + f(b)), |acc, i| acc + f(a + i as f64 * width));

        Ok(sum * width)
    }

    fn method(&self) -> QuadratureMethod {
        QuadratureMethod::Trapezoid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use std::cell::Cell;

    #[test]
    fn test_linear_integrand() {
        let value = TrapezoidRule.integrate(&|x: f64| 3.0 * x - 1.0, -1.0, 2.0, 10).unwrap();
        // ∫ 3x - 1 on [-1, 2] = 1.5
        assert!((value - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_error_bound() {
        // Trapezoid error is (b-a)^3 / (12 n^2) * f'' = 1 / (6 * 10^6)
        let value = TrapezoidRule.integrate(&|x: f64| x * x, 0.0, 1.0, 1000).unwrap();
        let error = value - 1.0 / 3.0;
        assert!(error > 0.0 && error < 2e-7);
    }

    #[test]
    fn test_single_interval() {
        let value = TrapezoidRule.integrate(&|x: f64| x * x, 0.0, 2.0, 1).unwrap();
        assert_eq!(value, 4.0);
    }

    #[test]
    fn test_reversed_bounds_negate() {
        let f = |x: f64| x.exp();
        let forward = TrapezoidRule.integrate(&f, 0.0, 1.0, 64).unwrap();
        let backward = TrapezoidRule.integrate(&f, 1.0, 0.0, 64).unwrap();
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_evaluation_count() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        TrapezoidRule.integrate(&f, 0.0, 1.0, 25).unwrap();
        assert_eq!(calls.get(), TrapezoidRule.evaluations(25));
        assert_eq!(calls.get(), 26);
    }

    #[test]
    fn test_zero_subdivisions_rejected() {
        assert_eq!(
            TrapezoidRule.integrate(&|x: f64| x, 0.0, 1.0, 0),
            Err(NumericError::InvalidSubdivisions)
        );
    }
}
