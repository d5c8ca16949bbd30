//! Line-oriented instance format.
//!
//! ```text
//! <task_count> <resource_count>
//! <capacity_1> ... <capacity_R>
//! <duration> <demand_1> ... <demand_R> <successor_count> <succ_1> ... <succ_k>
//! ```
//!
//! The third line repeats once per task. Blank lines are skipped and
//! surplus tokens at the end of a line are ignored. Successor ids are
//! 1-based in the file and 0-based in memory. Counts read from the input
//! never size an allocation up front.

use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::error::{InstanceError, InstanceResult};
use crate::models::{Instance, Resource, Task};

/// Parses an instance from text.
///
/// # Example
/// ```
/// let text = "2 1\n1\n2 1 1 2\n2 1 0\n";
/// let instance = rcpsp_preempt::parser::parse_instance(text).unwrap();
/// assert_eq!(instance.task_count(), 2);
/// assert_eq!(instance.successors(0), &[1]);
/// ```
pub fn parse_instance(text: &str) -> InstanceResult<Instance> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(i, l)| (i + 1, l));

    let (line_no, header) = lines.next().ok_or(InstanceError::MissingLine {
        line: 1,
        what: "header",
    })?;
    let mut tokens = Tokens::new(line_no, header);
    let task_count: usize = tokens.next("task count")?;
    let resource_count: usize = tokens.next("resource count")?;

    let (line_no, caps) = lines.next().ok_or(InstanceError::MissingLine {
        line: 2,
        what: "resource capacities",
    })?;
    let mut tokens = Tokens::new(line_no, caps);
    let resources = (0..resource_count)
        .map(|_| tokens.next("capacity").map(Resource::new))
        .collect::<InstanceResult<Vec<_>>>()?;

    let mut tasks = Vec::new();
    for i in 0..task_count {
        let (line_no, line) = lines.next().ok_or(InstanceError::MissingLine {
            line: i + 3,
            what: "task line",
        })?;
        let mut tokens = Tokens::new(line_no, line);

        let duration: u32 = tokens.next("duration")?;
        let demand = (0..resource_count)
            .map(|_| tokens.next("demand"))
            .collect::<InstanceResult<Vec<u32>>>()?;
        let successor_count: usize = tokens.next("successor count")?;
        let mut successors = Vec::new();
        for _ in 0..successor_count {
            let id: usize = tokens.next("successor id")?;
            // Ids are 1-based; 0 has no 0-based counterpart.
            let succ = id.checked_sub(1).ok_or(InstanceError::InvalidToken {
                line: line_no,
                what: "successor id",
                token: id.to_string(),
            })?;
            successors.push(succ);
        }

        tasks.push(Task {
            duration,
            demand,
            successors,
        });
    }

    let instance = Instance::new(tasks, resources)?;
    debug!(
        tasks = instance.task_count(),
        resources = instance.resource_count(),
        horizon = instance.horizon(),
        "parsed instance"
    );
    Ok(instance)
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> InstanceResult<Instance> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_instance(&text)
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s)
    }
}

struct Tokens<'a> {
    line: usize,
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &'static str) -> InstanceResult<T> {
        let token = self.inner.next().ok_or(InstanceError::MissingToken {
            line: self.line,
            what,
        })?;
        token.parse().map_err(|_| InstanceError::InvalidToken {
            line: self.line,
            what,
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3 2
4 2

3 2 1 2 2 3
2 1 1 1 3
4 2 2 0
";

    #[test]
    fn test_parse_sample() {
        let inst = parse_instance(SAMPLE).unwrap();
        assert_eq!(inst.task_count(), 3);
        assert_eq!(inst.resource_count(), 2);
        assert_eq!(inst.capacity(0), 4);
        assert_eq!(inst.capacity(1), 2);
        assert_eq!(inst.duration(0), 3);
        assert_eq!(inst.demand(0), &[2, 1]);
        assert_eq!(inst.successors(0), &[1, 2]);
        assert_eq!(inst.successors(1), &[2]);
        assert!(inst.successors(2).is_empty());
        assert_eq!(inst.horizon(), 9);
    }

    #[test]
    fn test_from_str() {
        let inst: Instance = SAMPLE.parse().unwrap();
        assert_eq!(inst.predecessors(2), &[0, 1]);
    }

    #[test]
    fn test_surplus_tokens_ignored() {
        let inst = parse_instance("1 1\n5 99\n2 1 0 extra\n").unwrap();
        assert_eq!(inst.capacity(0), 5);
        assert_eq!(inst.duration(0), 2);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_instance("   \n\n"),
            Err(InstanceError::MissingLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_task_line() {
        let err = parse_instance("2 1\n1\n2 1 0\n").unwrap_err();
        assert!(matches!(err, InstanceError::MissingLine { line: 4, .. }));
    }

    #[test]
    fn test_short_demand_vector() {
        let err = parse_instance("1 2\n1 1\n2 1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingToken {
                line: 3,
                what: "demand"
            }
        ));
    }

    #[test]
    fn test_missing_successor_ids() {
        let err = parse_instance("2 1\n1\n2 1 2 2\n1 1 0\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingToken {
                what: "successor id",
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_instance("1 1\n1\nabc 1 0\n").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidToken { what: "duration", .. }));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = parse_instance("1 1\n1\n2 -1 0\n").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidToken { what: "demand", .. }));
    }

    #[test]
    fn test_zero_successor_id_rejected() {
        let err = parse_instance("1 1\n1\n2 1 1 0\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::InvalidToken {
                what: "successor id",
                ..
            }
        ));
    }

    #[test]
    fn test_successor_beyond_task_count() {
        let err = parse_instance("1 1\n1\n2 1 1 2\n").unwrap_err();
        assert!(matches!(err, InstanceError::SuccessorOutOfRange { .. }));
    }

    #[test]
    fn test_huge_successor_count_is_an_error() {
        let err = parse_instance("1 1\n1\n2 1 99999999999999999\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingToken {
                line: 3,
                what: "successor id"
            }
        ));
    }

    #[test]
    fn test_huge_task_count_is_an_error() {
        let err = parse_instance("99999999999999999 1\n1\n2 1 0\n").unwrap_err();
        assert!(matches!(err, InstanceError::MissingLine { line: 4, .. }));
    }

    #[test]
    fn test_huge_resource_count_is_an_error() {
        let err = parse_instance("1 99999999999999999\n1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingToken {
                line: 2,
                what: "capacity"
            }
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_instance("/nonexistent/rcpsp/instance.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }
}
