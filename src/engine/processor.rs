// ============================================================================
// Data Processor
// Stateless facade over the statistics, quadrature and series engines
// ============================================================================

use crate::domain::{
    FilteredSummary, PercentileLadder, ProcessorConfig, QuadratureMethod, StatSummary,
};
use crate::engine::{elementwise, order_stats, rolling, series, statistics};
use crate::engine::{RectangleRule, SimpsonRule, TrapezoidRule};
use crate::interfaces::{EventHandler, ProcessorEvent, QuadratureRule, SeriesKind};
use crate::numeric::NumericResult;
use chrono::Utc;
use std::sync::Arc;

/// Data processor whose default quadrature rule follows its configuration
///
/// Holds no per-call state: every method is a pure function of its
/// arguments and the immutable configuration, so one processor can be
/// shared freely across threads.
pub struct DataProcessor {
    /// Numerical policies and defaults
    config: ProcessorConfig,

    /// Per-method rules
    rectangle: RectangleRule,
    trapezoid: TrapezoidRule,
    simpson: SimpsonRule,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl DataProcessor {
    /// Create a new data processor
    pub fn new(config: ProcessorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            simpson: SimpsonRule::new(config.simpson_parity),
            rectangle: RectangleRule,
            trapezoid: TrapezoidRule,
            config,
            event_handler,
        }
    }

    // ========================================================================
    // Statistics and order statistics
    // ========================================================================

    /// Mean, median and population standard deviation
    pub fn calculate_stats(&self, data: &[f64]) -> StatSummary {
        statistics::calculate_stats_with(data, self.config.variance_formula)
    }

    /// Multiply every element by `factor`
    pub fn transform(&self, data: &[f64], factor: f64) -> Vec<f64> {
        elementwise::transform(data, factor)
    }

    /// Keep elements strictly above `threshold`
    pub fn filter(&self, data: &[f64], threshold: f64) -> Vec<f64> {
        elementwise::filter(data, threshold)
    }

    /// Ascending copy of `data`
    pub fn sort_data(&self, data: &[f64]) -> Vec<f64> {
        order_stats::sort_data(data)
    }

    /// Values at every 5% of the sorted order
    pub fn calculate_percentiles(&self, data: &[f64]) -> PercentileLadder {
        order_stats::calculate_percentiles(data)
    }

    /// Rolling mean over a left-clamped window
    pub fn calculate_rolling_mean(&self, data: &[f64], window: usize) -> Vec<f64> {
        rolling::calculate_rolling_mean(data, window)
    }

    /// Filter, then summarize the survivors
    pub fn filter_and_analyze(&self, data: &[f64], threshold: f64) -> FilteredSummary {
        let kept = self.filter(data, threshold);
        let stats = if kept.is_empty() {
            None
        } else {
            Some(self.calculate_stats(&kept))
        };

        FilteredSummary {
            threshold,
            original_len: data.len(),
            filtered_len: kept.len(),
            stats,
        }
    }

    // ========================================================================
    // Quadrature
    // ========================================================================

    /// Integrate with the configured default rule and subdivision count
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> NumericResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.run_rule(
            self.rule_for(self.config.default_method),
            &f,
            a,
            b,
            self.config.default_subdivisions,
        )
    }

    /// Integrate with an explicit rule and subdivision count
    pub fn integrate_with<F>(
        &self,
        method: QuadratureMethod,
        f: F,
        a: f64,
        b: f64,
        n: usize,
    ) -> NumericResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.run_rule(self.rule_for(method), &f, a, b, n)
    }

    /// Midpoint rule
    pub fn integrate_rectangle<F>(&self, f: F, a: f64, b: f64, n: usize) -> NumericResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.run_rule(&self.rectangle, &f, a, b, n)
    }

    /// Trapezoid rule
    pub fn integrate_trapezoid<F>(&self, f: F, a: f64, b: f64, n: usize) -> NumericResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.run_rule(&self.trapezoid, &f, a, b, n)
    }

    /// Simpson's rule; odd `n` follows the configured parity policy
    pub fn integrate_simpson<F>(&self, f: F, a: f64, b: f64, n: usize) -> NumericResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.run_rule(&self.simpson, &f, a, b, n)
    }

    // ========================================================================
    // Series
    // ========================================================================

    /// Σ term(i) for i = 1..=n
    pub fn sum_series<F>(&self, term: F, n: i64) -> f64
    where
        F: Fn(i64) -> f64,
    {
        let value = series::sum_series(term, n);
        self.emit_series(SeriesKind::Sum, n, value);
        value
    }

    /// Π term(i) for i = 1..=n
    pub fn product_series<F>(&self, term: F, n: i64) -> f64
    where
        F: Fn(i64) -> f64,
    {
        let value = series::product_series(term, n);
        self.emit_series(SeriesKind::Product, n, value);
        value
    }

    /// Get the configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Name of the default quadrature rule
    pub fn default_rule_name(&self) -> &str {
        self.rule_for(self.config.default_method).name()
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn rule_for(&self, method: QuadratureMethod) -> &dyn QuadratureRule {
        match method {
            QuadratureMethod::Rectangle => &self.rectangle,
            QuadratureMethod::Trapezoid => &self.trapezoid,
            QuadratureMethod::Simpson => &self.simpson,
        }
    }

    fn run_rule(
        &self,
        rule: &dyn QuadratureRule,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        requested: usize,
    ) -> NumericResult<f64> {
        let method = rule.method();
        let mut events = Vec::new();

        let effective = match rule.effective_subdivisions(requested) {
            Ok(n) => n,
            Err(err) => {
                tracing::warn!("{} integration rejected: {}", rule.name(), err);
                self.event_handler.on_event(ProcessorEvent::rejected(method, err));
                return Err(err);
            },
        };

        if effective != requested {
            tracing::warn!(
                "{} integration using {} subdivisions instead of {}",
                rule.name(),
                effective,
                requested
            );
            events.push(ProcessorEvent::SubdivisionsAdjusted {
                method,
                requested,
                effective,
                timestamp: Utc::now(),
            });
        }

        let value = rule.integrate(f, a, b, effective)?;

        tracing::debug!(
            "{} integral over [{}, {}] with n={}: {}",
            rule.name(),
            a,
            b,
            effective,
            value
        );
        events.push(ProcessorEvent::IntegrationCompleted {
            method,
            lower: a,
            upper: b,
            subdivisions: effective,
            evaluations: rule.evaluations(effective),
            value,
            timestamp: Utc::now(),
        });

        self.event_handler.on_events(events);
        Ok(value)
    }

    fn emit_series(&self, kind: SeriesKind, terms: i64, value: f64) {
        tracing::debug!("{:?} series over 1..={}: {}", kind, terms, value);
        self.event_handler.on_event(ProcessorEvent::SeriesEvaluated {
            kind,
            terms,
            value,
            timestamp: Utc::now(),
        });
    }
}
