// ============================================================================
// Rectangle (Midpoint) Rule
// One integrand evaluation at the center of each subinterval
// ============================================================================

use crate::domain::QuadratureMethod;
use crate::interfaces::QuadratureRule;
use crate::numeric::NumericResult;

/// Composite midpoint rule
///
/// ```text
/// width  = (b - a) / n
/// result = width * Σ f(a + (i + 0.5) * width),  i = 0..n-1
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleRule;

impl RectangleRule {
    pub fn new() -> Self {
        Self
    }
}

impl QuadratureRule for RectangleRule {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> NumericResult<f64> {
        let n = self.effective_subdivisions(n)?;
        let width = (b - a) / n as f64;

        let sum = (0..n).fold(0.0, |acc, i| acc + f(a + (i as f64 + 0.5) * width));

        Ok(sum * width)
    }

    fn method(&self) -> QuadratureMethod {
        QuadratureMethod::Rectangle
    }

    fn evaluations(&self, n: usize) -> usize {
        n
    }
}
