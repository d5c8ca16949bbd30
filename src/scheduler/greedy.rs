//! Greedy topological constructor.
//!
//! # Algorithm
//!
//! 1. Count in-degrees from the successor lists.
//! 2. Seed a FIFO queue with every zero in-degree task, in index order.
//! 3. Pop, append to the order, and release successors whose in-degree
//!    drops to zero.
//! 4. Walk the order and start each task at the latest predecessor finish
//!    (0 without predecessors), as one uninterrupted interval.
//!
//! Resource capacities are ignored. The result respects precedence but may
//! still be rejected by the resource check of the evaluator.
//!
//! # Complexity
//! O(n + e) where n=tasks, e=precedence edges.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks"

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::ConstructionError;
use crate::models::{Instance, Schedule};

/// Builds a non-preemptive, precedence-respecting seed schedule.
///
/// # Example
/// ```
/// use rcpsp_preempt::models::{Instance, Resource, Task};
/// use rcpsp_preempt::scheduler::GreedyConstructor;
///
/// let instance = Instance::new(
///     vec![
///         Task::new(2).with_demand(vec![1]).with_successor(2),
///         Task::new(3).with_demand(vec![1]).with_successor(2),
///         Task::new(1).with_demand(vec![1]),
///     ],
///     vec![Resource::new(2)],
/// )
/// .unwrap();
///
/// let schedule = GreedyConstructor::new().construct(&instance).unwrap();
/// assert_eq!(schedule.start_time(2), Some(3.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstructor;

impl GreedyConstructor {
    /// Creates a constructor.
    pub fn new() -> Self {
        Self
    }

    /// Kahn order with a FIFO queue seeded in increasing index order.
    pub fn topological_order(&self, instance: &Instance) -> Result<Vec<usize>, ConstructionError> {
        let n = instance.task_count();
        let mut in_degree = vec![0usize; n];
        for (_, succ) in instance.precedence_edges() {
            in_degree[succ] += 1;
        }

        let mut ready: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(i) = ready.pop_front() {
            order.push(i);
            for &succ in instance.successors(i) {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    ready.push_back(succ);
                }
            }
        }

        if order.len() < n {
            let unscheduled: Vec<usize> = (0..n).filter(|&i| in_degree[i] > 0).collect();
            warn!(
                unscheduled = unscheduled.len(),
                "precedence cycle, cannot order all tasks"
            );
            return Err(ConstructionError::CyclicPrecedence { unscheduled });
        }
        Ok(order)
    }

    /// Schedules every task as one interval at its earliest precedence-feasible start.
    pub fn construct(&self, instance: &Instance) -> Result<Schedule, ConstructionError> {
        let order = self.topological_order(instance)?;

        let n = instance.task_count();
        let mut starts = vec![0u64; n];
        let mut finish = vec![0u64; n];

        for &i in &order {
            let start = instance
                .predecessors(i)
                .iter()
                .map(|&p| finish[p])
                .max()
                .unwrap_or(0);
            starts[i] = start;
            finish[i] = start + u64::from(instance.duration(i));
        }

        let starts: Vec<f64> = starts.into_iter().map(|s| s as f64).collect();
        let durations: Vec<u32> = instance.tasks().iter().map(|t| t.duration).collect();
        let schedule = Schedule::single_interval(&starts, &durations);

        debug!(
            tasks = n,
            makespan = finish.iter().copied().max().unwrap_or(0),
            "greedy schedule constructed"
        );
        Ok(schedule)
    }
}

/// Builds the greedy seed schedule for `instance`.
pub fn construct(instance: &Instance) -> Result<Schedule, ConstructionError> {
    GreedyConstructor::new().construct(instance)
}
