// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod quadrature_rule;

pub use event_handler::{
    EventHandler, LoggingEventHandler, NoOpEventHandler, ProcessorEvent, SeriesKind,
};
pub use quadrature_rule::QuadratureRule;
