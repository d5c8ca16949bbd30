//! Preemptive resource-constrained project scheduling (RCPSP).
//!
//! Models an instance (tasks with durations, per-resource demands and
//! successors; renewable resources with constant capacity), evaluates
//! candidate interval schedules for feasibility and makespan, and builds a
//! greedy seed schedule. Search drivers live outside this crate.
//!
//! # Modules
//!
//! - **`models`**: `Task`, `Resource`, `Instance`, `Interval`, `Schedule`, `Violation`
//! - **`parser`**: Line-oriented instance text format
//! - **`validation`**: Semantic instance checks (cycles, capacities)
//! - **`evaluation`**: `FeasibilityEvaluator`, `Evaluation`, `EvaluatorConfig`
//! - **`scheduler`**: `GreedyConstructor`
//!
//! # Example
//!
//! ```
//! use rcpsp_preempt::evaluation::evaluate;
//! use rcpsp_preempt::parser::parse_instance;
//! use rcpsp_preempt::scheduler::construct;
//!
//! let instance = parse_instance("2 1\n1\n2 1 1 2\n2 1 0\n").unwrap();
//! let seed = construct(&instance).unwrap();
//! assert_eq!(evaluate(&instance, &seed).makespan(), Some(4.0));
//! ```
//!
//! # Concurrency
//!
//! Everything is synchronous and side-effect free. An `Instance` can be
//! shared read-only across threads, each evaluating its own `Schedule`.
//!
//! # References
//!
//! - Kolisch & Hartmann (1999), "Heuristic Algorithms for the
//!   Resource-Constrained Project Scheduling Problem"
//! - Brucker et al. (1999), "Resource-constrained project scheduling:
//!   Notation, classification, models, and methods"

pub mod error;
pub mod evaluation;
pub mod models;
pub mod parser;
pub mod scheduler;
pub mod validation;

pub use error::{ConstructionError, InstanceError};
pub use evaluation::{evaluate, Evaluation, EvaluatorConfig, FeasibilityEvaluator};
pub use models::{Instance, Interval, Resource, Schedule, Task, Violation};
pub use scheduler::{construct, GreedyConstructor};
