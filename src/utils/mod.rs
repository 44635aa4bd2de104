// ============================================================================
// Utilities Module
// Helper functions for hosting the processor
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
