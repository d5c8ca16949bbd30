//! Feasibility evaluation of interval schedules.
//!
//! # Algorithm
//!
//! Checks run in a fixed order and stop at the first violation:
//!
//! 1. **Structure**: one non-empty interval list per task.
//! 2. **Intervals**: per task, in listed order, no reversed interval, no
//!    backward overlap with the previous interval, lengths summing to the
//!    duration. The finish time is the end of the last listed interval.
//! 3. **Precedence**: for every edge `i -> j`, `finish(i)` must not exceed
//!    the start of `j`'s *first listed* interval. Later intervals of `j`
//!    are not inspected.
//! 4. **Resources**: at every integer time unit `t` in `[0, horizon)`, the
//!    summed demand of tasks with an interval satisfying `start <= t < end`
//!    must not exceed capacity.
//!
//! If all pass, the cost is the maximum finish time.
//!
//! # Sampling Limitation
//!
//! Resource usage is sampled at integer time units only. Two fractional
//! intervals that overlap strictly between consecutive integers are not
//! seen as concurrent, and usage at or beyond the horizon is never checked.
//!
//! # Complexity
//! Step 4 is an event sweep: O(E log E + T·R) where E is the number of
//! interval boundary events and T the number of distinct event times.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::EvaluatorConfig;
use crate::models::{Instance, Interval, Schedule, Violation};

/// Outcome of evaluating a schedule.
///
/// Infeasibility is an ordinary result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Evaluation {
    /// All constraints hold.
    Feasible { makespan: f64 },
    /// At least one constraint is violated.
    Infeasible,
}

impl Evaluation {
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    /// Makespan, if feasible.
    #[inline]
    pub fn makespan(&self) -> Option<f64> {
        match *self {
            Self::Feasible { makespan } => Some(makespan),
            Self::Infeasible => None,
        }
    }

    /// Scalar cost for minimisation: makespan, or `f64::INFINITY` if infeasible.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.makespan().unwrap_or(f64::INFINITY)
    }
}

/// Evaluates schedules against one instance.
///
/// Holds only shared references and a `Copy` config, so one evaluator can
/// be used from several threads at once.
///
/// # Example
/// ```
/// use rcpsp_preempt::evaluation::{Evaluation, FeasibilityEvaluator};
/// use rcpsp_preempt::models::{Instance, Resource, Schedule, Task};
///
/// let instance = Instance::new(
///     vec![
///         Task::new(2).with_demand(vec![1]).with_successor(1),
///         Task::new(2).with_demand(vec![1]),
///     ],
///     vec![Resource::new(1)],
/// )
/// .unwrap();
/// let evaluator = FeasibilityEvaluator::new(&instance);
///
/// let ok = Schedule::from_pairs(vec![vec![(0.0, 2.0)], vec![(2.0, 4.0)]]);
/// assert_eq!(evaluator.evaluate(&ok), Evaluation::Feasible { makespan: 4.0 });
///
/// let early = Schedule::from_pairs(vec![vec![(0.0, 2.0)], vec![(1.0, 3.0)]]);
/// assert_eq!(evaluator.evaluate(&early), Evaluation::Infeasible);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityEvaluator<'a> {
    instance: &'a Instance,
    config: EvaluatorConfig,
}

impl<'a> FeasibilityEvaluator<'a> {
    /// Creates an evaluator with the default configuration.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            config: EvaluatorConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates a schedule: makespan if feasible, otherwise `Infeasible`.
    pub fn evaluate(&self, schedule: &Schedule) -> Evaluation {
        match self.check(schedule) {
            Ok(makespan) => Evaluation::Feasible { makespan },
            Err(violation) => {
                trace!(%violation, "schedule rejected");
                Evaluation::Infeasible
            }
        }
    }

    /// Like [`evaluate`](Self::evaluate) but reports the first violation found.
    pub fn check(&self, schedule: &Schedule) -> Result<f64, Violation> {
        self.check_structure(schedule)?;
        let finish = self.check_intervals(schedule)?;
        self.check_precedence(schedule, &finish)?;
        self.check_resources(schedule)?;

        Ok(finish.iter().copied().reduce(f64::max).unwrap_or(0.0))
    }

    fn check_structure(&self, schedule: &Schedule) -> Result<(), Violation> {
        let expected = self.instance.task_count();
        if schedule.task_count() != expected {
            return Err(Violation::TaskCountMismatch {
                expected,
                found: schedule.task_count(),
            });
        }

        let limit = self.instance.max_preemptions();
        for (task, list) in schedule.intervals.iter().enumerate() {
            if list.is_empty() {
                return Err(Violation::EmptyTask { task });
            }
            if self.config.enforce_preemption_limit && list.len() > limit {
                return Err(Violation::PreemptionLimit {
                    task,
                    intervals: list.len(),
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Returns the finish time of every task.
    fn check_intervals(&self, schedule: &Schedule) -> Result<Vec<f64>, Violation> {
        let tol = self.config.tolerance;
        let mut finish = Vec::with_capacity(schedule.task_count());

        for (task, list) in schedule.intervals.iter().enumerate() {
            let mut total = 0.0;
            let mut prev_end: Option<f64> = None;

            for (index, iv) in list.iter().enumerate() {
                if !iv.is_finite() {
                    return Err(Violation::NonFiniteInterval { task, index });
                }
                if iv.start > iv.end {
                    return Err(Violation::ReversedInterval { task, index });
                }
                if prev_end.is_some_and(|prev| iv.start < prev - tol) {
                    return Err(Violation::OverlappingInterval { task, index });
                }
                total += iv.length();
                prev_end = Some(iv.end);
            }

            let expected = self.instance.duration(task);
            if (total - f64::from(expected)).abs() > tol {
                return Err(Violation::DurationMismatch {
                    task,
                    expected,
                    scheduled: total,
                });
            }

            // Non-empty after check_structure.
            finish.push(prev_end.unwrap_or(0.0));
        }
        Ok(finish)
    }

    fn check_precedence(&self, schedule: &Schedule, finish: &[f64]) -> Result<(), Violation> {
        let tol = self.config.tolerance;
        for (pred, succ) in self.instance.precedence_edges() {
            let start = schedule.intervals[succ][0].start;
            if finish[pred] > start + tol {
                return Err(Violation::Precedence {
                    predecessor: pred,
                    successor: succ,
                    finish: finish[pred],
                    start,
                });
            }
        }
        Ok(())
    }

    /// Sweeps usage change events in time order.
    ///
    /// Usage is constant between consecutive event times, so checking at
    /// each event time finds the same earliest `(t, r)` as a full scan of
    /// every integer time unit.
    fn check_resources(&self, schedule: &Schedule) -> Result<(), Violation> {
        let tol = self.config.tolerance;
        let horizon = self.instance.horizon();
        let resource_count = self.instance.resource_count();
        if horizon == 0 || resource_count == 0 {
            return Ok(());
        }

        // (time, resource, delta)
        let mut events: Vec<(u64, usize, i64)> = Vec::new();
        for (task, list) in schedule.intervals.iter().enumerate() {
            let demand = self.instance.demand(task);
            if demand.iter().all(|&d| d == 0) {
                continue;
            }
            for iv in list {
                let Some((lo, hi)) = sampled_range(iv, horizon) else {
                    continue;
                };
                for (r, &d) in demand.iter().enumerate().filter(|&(_, &d)| d > 0) {
                    events.push((lo, r, i64::from(d)));
                    if hi < horizon {
                        events.push((hi, r, -i64::from(d)));
                    }
                }
            }
        }
        events.sort_unstable_by_key(|&(t, _, _)| t);

        let mut usage = vec![0i64; resource_count];
        let mut k = 0;
        while k < events.len() {
            let t = events[k].0;
            while k < events.len() && events[k].0 == t {
                let (_, r, delta) = events[k];
                usage[r] += delta;
                k += 1;
            }
            for (r, &used) in usage.iter().enumerate() {
                let capacity = self.instance.capacity(r);
                if used as f64 > f64::from(capacity) + tol {
                    return Err(Violation::CapacityExceeded {
                        resource: r,
                        time: t,
                        usage: used.unsigned_abs(),
                        capacity,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Integer time units `t` in `[0, horizon)` with `start <= t < end`, as `lo..hi`.
fn sampled_range(iv: &Interval, horizon: u64) -> Option<(u64, u64)> {
    let lo = iv.start.ceil().max(0.0);
    let hi = iv.end.ceil().min(horizon as f64);
    if lo >= hi {
        return None;
    }
    Some((lo as u64, hi as u64))
}

/// Evaluates `schedule` against `instance` with the default configuration.
pub fn evaluate(instance: &Instance, schedule: &Schedule) -> Evaluation {
    FeasibilityEvaluator::new(instance).evaluate(schedule)
}
