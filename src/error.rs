//! Hard errors raised while building an [`Instance`](crate::models::Instance).
//!
//! Malformed instances fail loudly and early. Infeasible schedules are not
//! errors; see [`Evaluation`](crate::evaluation::Evaluation).

use thiserror::Error;

/// Errors produced when an instance cannot be built.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required line is absent (1-based line number among non-blank lines).
    #[error("line {line}: missing {what}")]
    MissingLine { line: usize, what: &'static str },

    #[error("line {line}: expected {what}, found end of line")]
    MissingToken { line: usize, what: &'static str },

    #[error("line {line}: invalid {what} {token:?}")]
    InvalidToken {
        line: usize,
        what: &'static str,
        token: String,
    },

    #[error("task {task}: expected {expected} demand values, found {found}")]
    DemandCount {
        task: usize,
        expected: usize,
        found: usize,
    },

    #[error("task {task}: successor {successor} out of range (task count {task_count})")]
    SuccessorOutOfRange {
        task: usize,
        successor: usize,
        task_count: usize,
    },
}

/// Result alias for instance construction.
pub type InstanceResult<T> = Result<T, InstanceError>;

/// Errors produced by [`GreedyConstructor`](crate::scheduler::GreedyConstructor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Some tasks never reached zero in-degree: the precedence graph has a cycle.
    #[error("precedence graph has a cycle; {} task(s) could not be ordered", .unscheduled.len())]
    CyclicPrecedence { unscheduled: Vec<usize> },
}
