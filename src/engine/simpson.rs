// ============================================================================
// Simpson's Rule
// Alternating 4/2 interior weights over an even number of subintervals
// ============================================================================

use crate::domain::{QuadratureMethod, SimpsonParity};
use crate::interfaces::QuadratureRule;
use crate::numeric::{NumericError, NumericResult};

/// Composite Simpson's rule
///
/// ```text
/// width  = (b - a) / n,  n even
/// result = width / 3 * (f(a) + f(b) + Σ w_i f(a + i * width)),  i = 1..n-1
/// w_i    = 4 for odd i, 2 for even i
/// ```
///
/// An odd `n` is either bumped to `n + 1` or rejected, depending on the
/// configured [`SimpsonParity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpsonRule {
    parity: SimpsonParity,
}

impl SimpsonRule {
    pub fn new(parity: SimpsonParity) -> Self {
        Self { parity }
    }

    pub fn parity(&self) -> SimpsonParity {
        self.parity
    }
}

impl QuadratureRule for SimpsonRule {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> NumericResult<f64> {
        let n = self.effective_subdivisions(n)?;
        let width = (b - a) / n as f64;

        let sum = (1..n).fold(f(a) + f(b), |acc, i| {
            let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
            acc + f(a + i as f64 * width) * weight
        });

        Ok(sum * width / 3.0)
    }

    fn method(&self) -> QuadratureMethod {
        QuadratureMethod::Simpson
    }

    fn effective_subdivisions(&self, n: usize) -> NumericResult<usize> {
        if n == 0 {
            return Err(NumericError::InvalidSubdivisions);
        }
        if n % 2 == 0 {
            return Ok(n);
        }
        match self.parity {
            SimpsonParity::RoundUpToEven => Ok(n + 1),
            SimpsonParity::Reject => Err(NumericError::OddSubdivisions { requested: n }),
        }
    }
}
