//! Evaluator configuration.

use serde::{Deserialize, Serialize};

/// Default absolute tolerance for all floating-point comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Tunables for [`FeasibilityEvaluator`](super::FeasibilityEvaluator).
///
/// The defaults reproduce the reference feasibility notion exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Absolute tolerance for overlap, duration, precedence and capacity comparisons.
    pub tolerance: f64,
    /// Reject tasks split into more than `max_preemptions` intervals.
    pub enforce_preemption_limit: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            enforce_preemption_limit: false,
        }
    }
}

impl EvaluatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance (negative values are clamped to 0).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Enables or disables the preemption-limit check.
    pub fn with_preemption_limit(mut self, enforce: bool) -> Self {
        self.enforce_preemption_limit = enforce;
        self
    }
}
