//! Semantic validation of problem instances.
//!
//! [`Instance::new`] already rejects malformed input (demand arity,
//! successor range). This module reports problems that make an instance
//! well-formed but unschedulable:
//! - Circular precedence dependencies (DAG validation)
//! - Tasks listing themselves as successor
//! - Resources with zero capacity
//! - Task demand above a resource's capacity
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Precedence graph contains a cycle.
    CyclicDependency,
    /// A task lists itself as a successor.
    SelfDependency,
    /// A resource has no capacity.
    ZeroCapacity,
    /// A task needs more of a resource than exists.
    DemandExceedsCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance.
///
/// Checks:
/// 1. No task is its own successor
/// 2. No circular precedence dependencies
/// 3. Every resource has positive capacity
/// 4. No task demands more than a resource's capacity
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    for i in 0..instance.task_count() {
        if instance.successors(i).contains(&i) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfDependency,
                format!("Task {i} lists itself as a successor"),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(instance) {
        errors.push(cycle_err);
    }

    for (r, res) in instance.resources().iter().enumerate() {
        if res.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Resource {r} has zero capacity"),
            ));
        }
    }

    for (i, task) in instance.tasks().iter().enumerate() {
        // A zero-duration task never occupies a time unit.
        if task.duration == 0 {
            continue;
        }
        for (r, &d) in task.demand.iter().enumerate() {
            let capacity = instance.capacity(r);
            if capacity > 0 && d > capacity {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DemandExceedsCapacity,
                    format!("Task {i} demands {d} of resource {r}, capacity is {capacity}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the precedence graph using DFS.
///
/// Self-loops are reported separately and skipped here.
///
/// # Algorithm
/// Iterative DFS with three colours. Reaching a node that is still on
/// the stack (grey) is a back edge, hence a cycle.
fn detect_cycles(instance: &Instance) -> Option<ValidationError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        White,
        Grey,
        Black,
    }

    let n = instance.task_count();
    let mut mark = vec![Mark::White; n];
    // (node, next successor position)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if mark[root] != Mark::White {
            continue;
        }
        mark[root] = Mark::Grey;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            let succs = instance.successors(node);
            if top.1 == succs.len() {
                mark[node] = Mark::Black;
                stack.pop();
                continue;
            }
            let next = succs[top.1];
            top.1 += 1;
            if next == node {
                continue;
            }
            match mark[next] {
                Mark::Grey => {
                    return Some(ValidationError::new(
                        ValidationErrorKind::CyclicDependency,
                        format!("Circular dependency detected involving task {next}"),
                    ));
                }
                Mark::White => {
                    mark[next] = Mark::Grey;
                    stack.push((next, 0));
                }
                Mark::Black => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Resource, Task};

    fn build(tasks: Vec<Task>, capacities: &[u32]) -> Instance {
        Instance::new(tasks, capacities.iter().copied().map(Resource::new).collect()).unwrap()
    }

    #[test]
    fn test_valid_instance() {
        let inst = build(
            vec![
                Task::new(2).with_demand(vec![1]).with_successor(1),
                Task::new(3).with_demand(vec![2]).with_successor(2),
                Task::new(1).with_demand(vec![0]),
            ],
            &[2],
        );
        assert!(validate_instance(&inst).is_ok());
    }

    #[test]
    fn test_cyclic_dependency() {
        // 0 -> 1 -> 2 -> 0
        let inst = build(
            vec![
                Task::new(1).with_demand(vec![0]).with_successor(1),
                Task::new(1).with_demand(vec![0]).with_successor(2),
                Task::new(1).with_demand(vec![0]).with_successor(0),
            ],
            &[1],
        );
        let errors = validate_instance(&inst).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // 0 -> {1, 2} -> 3
        let inst = build(
            vec![
                Task::new(1).with_demand(vec![]).with_successor(1).with_successor(2),
                Task::new(1).with_demand(vec![]).with_successor(3),
                Task::new(1).with_demand(vec![]).with_successor(3),
                Task::new(1).with_demand(vec![]),
            ],
            &[],
        );
        assert!(validate_instance(&inst).is_ok());
    }

    #[test]
    fn test_self_dependency() {
        let inst = build(vec![Task::new(1).with_demand(vec![]).with_successor(0)], &[]);
        let errors = validate_instance(&inst).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::SelfDependency);
    }

    #[test]
    fn test_zero_capacity() {
        let inst = build(vec![Task::new(1).with_demand(vec![0])], &[0]);
        let errors = validate_instance(&inst).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCapacity));
    }

    #[test]
    fn test_demand_exceeds_capacity() {
        let inst = build(vec![Task::new(2).with_demand(vec![3, 1])], &[2, 5]);
        let errors = validate_instance(&inst).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DemandExceedsCapacity);
        assert!(errors[0].message.contains("resource 0"));
    }

    #[test]
    fn test_zero_duration_demand_ignored() {
        let inst = build(vec![Task::new(0).with_demand(vec![9])], &[1]);
        assert!(validate_instance(&inst).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let inst = build(
            vec![
                Task::new(1).with_demand(vec![5]).with_successor(1),
                Task::new(1).with_demand(vec![0]).with_successor(0),
            ],
            &[1],
        );
        let errors = validate_instance(&inst).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
