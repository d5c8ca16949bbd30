//! Domain models for preemptive project scheduling.
//!
//! | Type | Role |
//! |------|------|
//! | [`Task`] | Duration, per-resource demand, successors |
//! | [`Resource`] | Renewable capacity |
//! | [`Instance`] | Immutable problem: tasks, resources, derived horizon |
//! | [`Schedule`] | Candidate solution: intervals per task |
//! | [`Violation`] | First constraint a rejected schedule breaks |

mod instance;
mod resource;
mod schedule;
mod task;

pub use instance::{Instance, MAX_PREEMPTIONS};
pub use resource::Resource;
pub use schedule::{Interval, Schedule, Violation};
pub use task::Task;

#[cfg(test)]
pub(crate) mod fixtures;
