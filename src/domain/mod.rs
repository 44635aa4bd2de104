// ============================================================================
// Domain Models Module
// Contains all result value types and configuration
// ============================================================================

pub mod config;
pub mod summary;

pub use config::{
    ProcessorConfig, QuadratureMethod, SimpsonParity, VarianceFormula, DEFAULT_SUBDIVISIONS,
};
pub use summary::{
    FilteredSummary, PercentileLadder, StatSummary, PERCENTILE_RUNGS, PERCENTILE_STEP,
};
