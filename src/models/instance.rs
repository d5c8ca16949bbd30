//! Problem instance.
//!
//! Immutable bundle of tasks, resource capacities and the precedence
//! graph. The horizon and the predecessor lists are derived at
//! construction and never stored as input.

use serde::{Deserialize, Serialize};

use super::{Resource, Task};
use crate::error::{InstanceError, InstanceResult};

/// Maximum number of intervals a single task may be split into.
pub const MAX_PREEMPTIONS: usize = 4;

/// A preemptive RCPSP instance.
///
/// # Invariants
/// - every task has exactly `resource_count()` demand values
/// - every successor index is in `0..task_count()`
/// - `horizon()` equals the sum of all task durations
///
/// The precedence graph is expected to be acyclic but this is not
/// enforced here; see [`validate_instance`](crate::validation::validate_instance).
///
/// # Example
/// ```
/// use rcpsp_preempt::models::{Instance, Resource, Task};
///
/// let instance = Instance::new(
///     vec![
///         Task::new(2).with_demand(vec![1]).with_successor(1),
///         Task::new(3).with_demand(vec![1]),
///     ],
///     vec![Resource::new(1)],
/// )
/// .unwrap();
/// assert_eq!(instance.horizon(), 5);
/// assert_eq!(instance.predecessors(1), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InstanceData", into = "InstanceData")]
pub struct Instance {
    tasks: Vec<Task>,
    resources: Vec<Resource>,
    predecessors: Vec<Vec<usize>>,
    horizon: u64,
    max_preemptions: usize,
}

/// Wire form of an instance: only the inputs, never derived fields.
#[derive(Serialize, Deserialize)]
struct InstanceData {
    tasks: Vec<Task>,
    resources: Vec<Resource>,
}

impl TryFrom<InstanceData> for Instance {
    type Error = InstanceError;

    fn try_from(data: InstanceData) -> Result<Self, Self::Error> {
        Instance::new(data.tasks, data.resources)
    }
}

impl From<Instance> for InstanceData {
    fn from(instance: Instance) -> Self {
        Self {
            tasks: instance.tasks,
            resources: instance.resources,
        }
    }
}

impl Instance {
    /// Builds an instance, checking demand arity and successor indices.
    pub fn new(tasks: Vec<Task>, resources: Vec<Resource>) -> InstanceResult<Self> {
        let task_count = tasks.len();
        let mut predecessors = vec![Vec::new(); task_count];

        for (i, task) in tasks.iter().enumerate() {
            if task.demand.len() != resources.len() {
                return Err(InstanceError::DemandCount {
                    task: i,
                    expected: resources.len(),
                    found: task.demand.len(),
                });
            }
            for &succ in &task.successors {
                if succ >= task_count {
                    return Err(InstanceError::SuccessorOutOfRange {
                        task: i,
                        successor: succ,
                        task_count,
                    });
                }
                predecessors[succ].push(i);
            }
        }

        let horizon = tasks.iter().map(|t| u64::from(t.duration)).sum();

        Ok(Self {
            tasks,
            resources,
            predecessors,
            horizon,
            max_preemptions: MAX_PREEMPTIONS,
        })
    }

    /// Number of tasks.
    #[inline]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of resources.
    #[inline]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// All tasks, in index order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All resources, in index order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Capacity of resource `r`.
    #[inline]
    pub fn capacity(&self, r: usize) -> u32 {
        self.resources[r].capacity
    }

    #[inline]
    pub fn duration(&self, i: usize) -> u32 {
        self.tasks[i].duration
    }

    #[inline]
    pub fn demand(&self, i: usize) -> &[u32] {
        &self.tasks[i].demand
    }

    #[inline]
    pub fn successors(&self, i: usize) -> &[usize] {
        &self.tasks[i].successors
    }

    /// Tasks that list `i` as a successor, in increasing index order.
    ///
    /// A task listing the same successor twice appears twice.
    #[inline]
    pub fn predecessors(&self, i: usize) -> &[usize] {
        &self.predecessors[i]
    }

    /// Sum of all task durations; an upper bound on any feasible makespan.
    #[inline]
    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    /// Maximum number of intervals per task.
    #[inline]
    pub fn max_preemptions(&self) -> usize {
        self.max_preemptions
    }

    /// Iterator over all precedence edges `(predecessor, successor)`.
    pub fn precedence_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .flat_map(|(i, t)| t.successors.iter().map(move |&j| (i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Instance {
        Instance::new(
            vec![
                Task::new(2).with_demand(vec![1, 0]).with_successor(1),
                Task::new(3).with_demand(vec![0, 2]).with_successor(2),
                Task::new(4).with_demand(vec![1, 1]),
            ],
            vec![Resource::new(1), Resource::new(2)],
        )
        .unwrap()
    }

    #[test]
    fn test_instance_accessors() {
        let inst = chain();
        assert_eq!(inst.task_count(), 3);
        assert_eq!(inst.resource_count(), 2);
        assert_eq!(inst.capacity(1), 2);
        assert_eq!(inst.duration(2), 4);
        assert_eq!(inst.demand(1), &[0, 2]);
        assert_eq!(inst.successors(0), &[1]);
        assert_eq!(inst.max_preemptions(), MAX_PREEMPTIONS);
    }

    #[test]
    fn test_horizon_is_sum_of_durations() {
        assert_eq!(chain().horizon(), 9);
    }

    #[test]
    fn test_predecessors_derived() {
        let inst = chain();
        assert!(inst.predecessors(0).is_empty());
        assert_eq!(inst.predecessors(1), &[0]);
        assert_eq!(inst.predecessors(2), &[1]);
    }

    #[test]
    fn test_precedence_edges() {
        let edges: Vec<_> = chain().precedence_edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_demand_count_mismatch() {
        let err = Instance::new(
            vec![Task::new(1).with_demand(vec![1])],
            vec![Resource::new(1), Resource::new(1)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InstanceError::DemandCount {
                task: 0,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_successor_out_of_range() {
        let err = Instance::new(
            vec![Task::new(1).with_demand(vec![]).with_successor(5)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InstanceError::SuccessorOutOfRange { successor: 5, .. }
        ));
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(vec![], vec![Resource::new(1)]).unwrap();
        assert_eq!(inst.task_count(), 0);
        assert_eq!(inst.horizon(), 0);
    }

    #[test]
    fn test_serde_rederives_horizon() {
        let json = r#"{
            "tasks": [
                {"duration": 2, "demand": [1], "successors": [1]},
                {"duration": 3, "demand": [1], "successors": []}
            ],
            "resources": [{"capacity": 1}]
        }"#;
        let inst: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(inst.horizon(), 5);
        assert_eq!(inst.predecessors(1), &[0]);

        let bad = r#"{
            "tasks": [{"duration": 1, "demand": [], "successors": [9]}],
            "resources": []
        }"#;
        assert!(serde_json::from_str::<Instance>(bad).is_err());
    }
}
