// ============================================================================
// Event Handler Interface
// Defines the contract for observing completed computations
// ============================================================================

use crate::domain::QuadratureMethod;
use crate::numeric::NumericError;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Series accumulation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeriesKind {
    Sum,
    Product,
}

/// Events emitted by the data processor
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcessorEvent {
    /// Integral approximated
    IntegrationCompleted {
        method: QuadratureMethod,
        lower: f64,
        upper: f64,
        subdivisions: usize,
        evaluations: usize,
        value: f64,
        timestamp: DateTime<Utc>,
    },

    /// Integration refused before evaluating the integrand
    IntegrationRejected {
        method: QuadratureMethod,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Rule used a different subdivision count than requested
    SubdivisionsAdjusted {
        method: QuadratureMethod,
        requested: usize,
        effective: usize,
        timestamp: DateTime<Utc>,
    },

    /// Series accumulated over 1..=terms
    SeriesEvaluated {
        kind: SeriesKind,
        terms: i64,
        value: f64,
        timestamp: DateTime<Utc>,
    },
}

impl ProcessorEvent {
    pub(crate) fn rejected(method: QuadratureMethod, error: NumericError) -> Self {
        ProcessorEvent::IntegrationRejected {
            method,
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Event handler trait for processing data processor events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a processor event
    fn on_event(&self, event: ProcessorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ProcessorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ProcessorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ProcessorEvent) {
        tracing::debug!("Data processor event: {:?}", event);
    }
}
