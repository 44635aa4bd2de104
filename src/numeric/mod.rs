// ============================================================================
// Numeric Module
// Error types shared by every computation in the crate
// ============================================================================
//
// This module provides:
// - NumericError: Error types for rejected computation inputs
// - NumericResult: Result alias used by quadrature and configuration code
//
// Design principles:
// - Degenerate inputs (empty samples, empty series ranges) have defined results
// - Only inputs with no meaningful result are rejected
// - No panics on caller-supplied data

mod errors;

pub use errors::{NumericError, NumericResult};
