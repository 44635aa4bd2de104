// ============================================================================
// Processor Configuration
// Numerical policy choices and quadrature defaults
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Subdivision count used when the caller does not pick one
pub const DEFAULT_SUBDIVISIONS: usize = 1000;

// ============================================================================
// Quadrature Method
// ============================================================================

/// Discretization rule used to approximate a definite integral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuadratureMethod {
    /// Midpoint rule
    /// - One evaluation per subinterval, at its center
    /// - Exact for linear integrands
    Rectangle,

    /// Trapezoid rule
    /// - Evaluates every node, endpoints weighted 1/2
    /// - Exact for linear integrands
    Trapezoid,

    /// Composite Simpson's rule
    /// - Needs an even subdivision count (see [`SimpsonParity`])
    /// - Exact for polynomials up to degree 3
    Simpson,
}

impl QuadratureMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuadratureMethod::Rectangle => "rectangle",
            QuadratureMethod::Trapezoid => "trapezoid",
            QuadratureMethod::Simpson => "simpson",
        }
    }
}

// ============================================================================
// Numerical Policies
// ============================================================================

/// How the population standard deviation is accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VarianceFormula {
    /// sqrt(E[x²] − E[x]²) from one accumulated sum of squares
    #[default]
    SinglePass,

    /// Sum of squared deviations from the mean, divided by the count
    TwoPass,
}

/// What Simpson's rule does with an odd subdivision count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SimpsonParity {
    /// Silently use n + 1 subintervals
    #[default]
    RoundUpToEven,

    /// Fail with [`NumericError::OddSubdivisions`]
    Reject,
}

// ============================================================================
// Complete Processor Configuration
// ============================================================================

/// Configuration for a [`DataProcessor`](crate::engine::DataProcessor)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessorConfig {
    /// Rule used by `DataProcessor::integrate`
    pub default_method: QuadratureMethod,

    /// Subdivision count used by `DataProcessor::integrate`
    pub default_subdivisions: usize,

    /// Standard deviation accumulation
    pub variance_formula: VarianceFormula,

    /// Odd-n handling for Simpson's rule
    pub simpson_parity: SimpsonParity,
}

impl ProcessorConfig {
    /// Create a new configuration with the given default quadrature method
    pub fn new(default_method: QuadratureMethod) -> Self {
        Self {
            default_method,
            default_subdivisions: DEFAULT_SUBDIVISIONS,
            variance_formula: VarianceFormula::SinglePass,
            simpson_parity: SimpsonParity::RoundUpToEven,
        }
    }

    /// Builder method: Set default subdivision count
    pub fn with_default_subdivisions(mut self, n: usize) -> Self {
        self.default_subdivisions = n;
        self
    }

    /// Builder method: Set variance formula
    pub fn with_variance_formula(mut self, formula: VarianceFormula) -> Self {
        self.variance_formula = formula;
        self
    }

    /// Builder method: Set Simpson parity policy
    pub fn with_simpson_parity(mut self, parity: SimpsonParity) -> Self {
        self.simpson_parity = parity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.check().map_err(|e| e.to_string())
    }

    /// Validate the configuration, one [`NumericError::InvalidConfig`] reason per rule
    pub fn check(&self) -> NumericResult<()> {
        if self.default_subdivisions == 0 {
            return Err(NumericError::InvalidConfig("default subdivisions must be positive"));
        }

        if self.default_method == QuadratureMethod::Simpson
            && self.simpson_parity == SimpsonParity::Reject
            && self.default_subdivisions % 2 != 0
        {
            return Err(NumericError::InvalidConfig(
                "default subdivisions must be even when simpson rejects odd counts",
            ));
        }

        Ok(())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::legacy()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ProcessorConfig {
    /// Bit-compatible with the established behavior, except that a negative
    /// variance radicand is clamped to 0.0 instead of producing NaN
    /// - Rectangle rule by default
    /// - Single-pass variance
    /// - Simpson rounds odd n up
    pub fn legacy() -> Self {
        Self::new(QuadratureMethod::Rectangle)
    }

    /// Accuracy over compatibility
    /// - Simpson's rule by default
    /// - Two-pass variance
    /// - Simpson rejects odd n
    pub fn numerically_stable() -> Self {
        Self::new(QuadratureMethod::Simpson)
            .with_variance_formula(VarianceFormula::TwoPass)
            .with_simpson_parity(SimpsonParity::Reject)
    }
}

#[cfg(feature = "serde")]
impl ProcessorConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> NumericResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|_| NumericError::InvalidConfig("malformed configuration document"))?;
        config.check()?;
        Ok(config)
    }

    /// Serialize to a JSON document
    pub fn to_json(&self) -> NumericResult<String> {
        serde_json::to_string(self)
            .map_err(|_| NumericError::InvalidConfig("configuration is not serializable"))
    }
}
