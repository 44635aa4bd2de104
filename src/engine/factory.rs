// ============================================================================
// Data Processor Factory
// Creates data processors with validated configuration
// ============================================================================

use crate::domain::config::{ProcessorConfig, QuadratureMethod, SimpsonParity, VarianceFormula};
use crate::engine::DataProcessor;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a data processor from configuration
///
/// # Arguments
/// * `config` - Processor configuration
/// * `event_handler` - Event handler for computation events
///
/// # Returns
/// * `Result<DataProcessor, String>` - Configured processor or error
///
/// # Example
/// ```
/// use data_processor::prelude::*;
/// use data_processor::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ProcessorConfig::numerically_stable();
/// let processor = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(processor.default_rule_name(), "simpson");
/// ```
pub fn create_from_config(
    config: ProcessorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<DataProcessor, String> {
    // Validate configuration first
    config.validate()?;

    Ok(DataProcessor::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating data processors with fluent API
///
/// # Example
/// ```
/// use data_processor::prelude::*;
/// use data_processor::engine::factory::DataProcessorBuilder;
/// use std::sync::Arc;
///
/// let processor = DataProcessorBuilder::new()
///     .trapezoid_integration()
///     .with_default_subdivisions(500)
///     .two_pass_variance()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// let area = processor.integrate(|x| 2.0 * x, 0.0, 1.0).unwrap();
/// assert!((area - 1.0).abs() < 1e-12);
/// ```
pub struct DataProcessorBuilder {
    config: ProcessorConfig,
}

impl DataProcessorBuilder {
    /// Create a new builder with the legacy defaults
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::legacy(),
        }
    }

    // ========================================================================
    // Quadrature Configuration
    // ========================================================================

    /// Integrate with the midpoint rule by default
    pub fn rectangle_integration(mut self) -> Self {
        self.config.default_method = QuadratureMethod::Rectangle;
        self
    }

    /// Integrate with the trapezoid rule by default
    pub fn trapezoid_integration(mut self) -> Self {
        self.config.default_method = QuadratureMethod::Trapezoid;
        self
    }

    /// Integrate with Simpson's rule by default
    pub fn simpson_integration(mut self, parity: SimpsonParity) -> Self {
        self.config.default_method = QuadratureMethod::Simpson;
        self.config.simpson_parity = parity;
        self
    }

    /// Set the subdivision count used by `integrate`
    pub fn with_default_subdivisions(mut self, n: usize) -> Self {
        self.config.default_subdivisions = n;
        self
    }

    // ========================================================================
    // Statistics Configuration
    // ========================================================================

    /// Use the single-pass variance formula
    pub fn single_pass_variance(mut self) -> Self {
        self.config.variance_formula = VarianceFormula::SinglePass;
        self
    }

    /// Use the two-pass variance formula
    pub fn two_pass_variance(mut self) -> Self {
        self.config.variance_formula = VarianceFormula::TwoPass;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the numerically stable preset
    pub fn numerically_stable() -> Self {
        Self {
            config: ProcessorConfig::numerically_stable(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: ProcessorConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the data processor
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<DataProcessor, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ProcessorConfig {
        &self.config
    }
}

impl Default for DataProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
