//! Schedule feasibility evaluation.
//!
//! [`FeasibilityEvaluator`] decides whether an interval schedule satisfies
//! structure, duration, precedence and cumulative resource constraints, and
//! reports the makespan if it does. Malformed or infeasible schedules yield
//! [`Evaluation::Infeasible`]; they never panic or return an error.
//!
//! # Reference
//! Kolisch & Hartmann (1999), "Heuristic Algorithms for the
//! Resource-Constrained Project Scheduling Problem"

mod config;
mod evaluator;

pub use config::{EvaluatorConfig, DEFAULT_TOLERANCE};
pub use evaluator::{evaluate, Evaluation, FeasibilityEvaluator};
