// ============================================================================
// Quadrature Rule Interface
// Defines the contract for pluggable integration rules
// ============================================================================

use crate::domain::QuadratureMethod;
use crate::numeric::{NumericError, NumericResult};

/// Strategy pattern interface for quadrature rules
/// Implementations: Rectangle (midpoint), Trapezoid, Simpson
pub trait QuadratureRule: Send + Sync {
    /// Approximate the integral of `f` over [a, b] with `n` subintervals
    ///
    /// # Arguments
    /// * `f` - Integrand, assumed pure and total on [a, b]
    /// * `a` - Lower bound; a > b is allowed and flips the sign
    /// * `b` - Upper bound
    /// * `n` - Requested subdivision count
    ///
    /// # Returns
    /// The approximation, or an error when `n` is not usable by this rule
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> NumericResult<f64>;

    /// Which rule this is
    fn method(&self) -> QuadratureMethod;

    /// Get the rule name for logging
    fn name(&self) -> &str {
        self.method().as_str()
    }

    /// Subdivision count actually used for a request of `n`
    /// Default implementation only rejects zero
    fn effective_subdivisions(&self, n: usize) -> NumericResult<usize> {
        if n == 0 {
            return Err(NumericError::InvalidSubdivisions);
        }
        Ok(n)
    }

    /// Number of integrand evaluations for `n` effective subdivisions
    /// Default implementation counts every node including both endpoints
    fn evaluations(&self, n: usize) -> usize {
        n + 1
    }
}
