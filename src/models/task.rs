//! Task model.
//!
//! A task is a unit of work with a fixed total duration, a per-time-unit
//! demand on every renewable resource, and a set of successors that may
//! only start once it has finished.

use serde::{Deserialize, Serialize};

/// A task to be scheduled.
///
/// # Time Representation
/// Durations are integral time units. A schedule may split the task into
/// several intervals, but their lengths must add up to `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Total processing time.
    pub duration: u32,
    /// Units consumed per time unit, one entry per resource.
    pub demand: Vec<u32>,
    /// 0-based indices of tasks that must not start before this one finishes.
    pub successors: Vec<usize>,
}

impl Task {
    /// Creates a task with the given duration, no demand and no successors.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            demand: Vec::new(),
            successors: Vec::new(),
        }
    }

    /// Sets the resource demand vector.
    pub fn with_demand(mut self, demand: Vec<u32>) -> Self {
        self.demand = demand;
        self
    }

    /// Adds a successor (0-based task index).
    pub fn with_successor(mut self, successor: usize) -> Self {
        self.successors.push(successor);
        self
    }

    /// Demand on resource `r` (0 if the vector is shorter).
    #[inline]
    pub fn demand_for(&self, r: usize) -> u32 {
        self.demand.get(r).copied().unwrap_or(0)
    }

    /// Whether this task lists any successor.
    pub fn has_successors(&self) -> bool {
        !self.successors.is_empty()
    }
}
