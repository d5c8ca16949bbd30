//! Constructive schedulers.
//!
//! [`GreedyConstructor`] produces a non-preemptive seed schedule from a
//! topological order of the precedence graph. It is a fast baseline for a
//! search driver, not an optimiser, and it does not look at resources.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Kolisch (1996), "Serial and parallel resource-constrained project
//!   scheduling methods revisited"

mod greedy;

pub use greedy::{construct, GreedyConstructor};
