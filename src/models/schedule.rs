//! Schedule (solution) model.
//!
//! A schedule gives every task an ordered list of execution intervals.
//! More than one interval means the task is preempted. The list order is
//! trusted as given: the finish time of a task is the end of its *last
//! listed* interval, not the maximum end.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Instance;

/// A half-open execution window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Creates an interval.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether both bounds are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Whether integer time unit `t` is sampled as running (`start <= t < end`).
    #[inline]
    pub fn covers(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

/// A candidate schedule: one interval list per task.
///
/// Schedules are plain values; evaluation never mutates them.
///
/// # Example
/// ```
/// use rcpsp_preempt::models::Schedule;
///
/// let s = Schedule::from_pairs(vec![vec![(0.0, 1.0), (2.0, 3.0)], vec![(1.0, 2.0)]]);
/// assert_eq!(s.finish_time(0), Some(3.0));
/// assert_eq!(s.preemption_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Interval lists, indexed by task.
    pub intervals: Vec<Vec<Interval>>,
}

impl Schedule {
    /// Creates a schedule from per-task interval lists.
    pub fn new(intervals: Vec<Vec<Interval>>) -> Self {
        Self { intervals }
    }

    /// Creates a schedule from `(start, end)` pairs.
    pub fn from_pairs(pairs: Vec<Vec<(f64, f64)>>) -> Self {
        Self {
            intervals: pairs
                .into_iter()
                .map(|list| list.into_iter().map(Interval::from).collect())
                .collect(),
        }
    }

    /// Non-preemptive schedule: task `i` runs in `[starts[i], starts[i] + durations[i])`.
    pub fn single_interval(starts: &[f64], durations: &[u32]) -> Self {
        Self {
            intervals: starts
                .iter()
                .zip(durations)
                .map(|(&s, &d)| vec![Interval::new(s, s + f64::from(d))])
                .collect(),
        }
    }

    /// Number of interval lists.
    pub fn task_count(&self) -> usize {
        self.intervals.len()
    }

    /// Intervals of task `i`, if present.
    pub fn task_intervals(&self, i: usize) -> Option<&[Interval]> {
        self.intervals.get(i).map(Vec::as_slice)
    }

    /// End of the last listed interval of task `i`.
    pub fn finish_time(&self, i: usize) -> Option<f64> {
        self.intervals.get(i)?.last().map(|iv| iv.end)
    }

    /// Start of the first listed interval of task `i`.
    pub fn start_time(&self, i: usize) -> Option<f64> {
        self.intervals.get(i)?.first().map(|iv| iv.start)
    }

    /// Total number of intervals across all tasks.
    pub fn interval_count(&self) -> usize {
        self.intervals.iter().map(Vec::len).sum()
    }

    /// Number of splits: intervals beyond the first, summed over tasks.
    pub fn preemption_count(&self) -> usize {
        self.intervals
            .iter()
            .map(|list| list.len().saturating_sub(1))
            .sum()
    }

    /// Whether no task uses more intervals than the instance allows.
    pub fn respects_preemption_limit(&self, instance: &Instance) -> bool {
        self.intervals
            .iter()
            .all(|list| list.len() <= instance.max_preemptions())
    }
}

/// The first constraint a rejected schedule violates.
///
/// Carries indices and numbers only so that producing one never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    /// The schedule does not hold one interval list per task.
    TaskCountMismatch { expected: usize, found: usize },
    /// A task has no intervals.
    EmptyTask { task: usize },
    /// An interval bound is NaN or infinite.
    NonFiniteInterval { task: usize, index: usize },
    /// `start > end`.
    ReversedInterval { task: usize, index: usize },
    /// An interval starts before the previous listed interval ends.
    OverlappingInterval { task: usize, index: usize },
    /// Interval lengths do not add up to the task duration.
    DurationMismatch {
        task: usize,
        expected: u32,
        scheduled: f64,
    },
    /// More intervals than `max_preemptions` (only when enforced).
    PreemptionLimit {
        task: usize,
        intervals: usize,
        limit: usize,
    },
    /// A successor starts before its predecessor finishes.
    Precedence {
        predecessor: usize,
        successor: usize,
        finish: f64,
        start: f64,
    },
    /// Summed demand exceeds capacity at a sampled time unit.
    CapacityExceeded {
        resource: usize,
        time: u64,
        usage: u64,
        capacity: u32,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TaskCountMismatch { expected, found } => {
                write!(f, "expected {expected} interval lists, found {found}")
            }
            Self::EmptyTask { task } => write!(f, "task {task} has no intervals"),
            Self::NonFiniteInterval { task, index } => {
                write!(f, "task {task} interval {index} has a non-finite bound")
            }
            Self::ReversedInterval { task, index } => {
                write!(f, "task {task} interval {index} ends before it starts")
            }
            Self::OverlappingInterval { task, index } => write!(
                f,
                "task {task} interval {index} starts before the previous interval ends"
            ),
            Self::DurationMismatch {
                task,
                expected,
                scheduled,
            } => write!(
                f,
                "task {task} scheduled for {scheduled}, duration is {expected}"
            ),
            Self::PreemptionLimit {
                task,
                intervals,
                limit,
            } => write!(f, "task {task} uses {intervals} intervals, limit is {limit}"),
            Self::Precedence {
                predecessor,
                successor,
                finish,
                start,
            } => write!(
                f,
                "task {successor} starts at {start} before predecessor {predecessor} \
                 finishes at {finish}"
            ),
            Self::CapacityExceeded {
                resource,
                time,
                usage,
                capacity,
            } => write!(
                f,
                "resource {resource} at t={time}: usage {usage} exceeds capacity {capacity}"
            ),
        }
    }
}
