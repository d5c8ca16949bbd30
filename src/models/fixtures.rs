//! Shared test instances.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Instance, Resource, Task};

/// Two tasks, one unit-capacity resource, task 0 precedes task 1.
pub(crate) fn two_task_chain() -> Instance {
    Instance::new(
        vec![
            Task::new(2).with_demand(vec![1]).with_successor(1),
            Task::new(2).with_demand(vec![1]),
        ],
        vec![Resource::new(1)],
    )
    .unwrap()
}

/// Two independent tasks of duration 2 on one unit-capacity resource.
pub(crate) fn two_independent() -> Instance {
    Instance::new(
        vec![
            Task::new(2).with_demand(vec![1]),
            Task::new(2).with_demand(vec![1]),
        ],
        vec![Resource::new(1)],
    )
    .unwrap()
}

/// Random DAG instance: edges only go from lower to higher index.
pub(crate) fn random_instance(rng: &mut StdRng, tasks: usize, resources: usize) -> Instance {
    let capacities: Vec<u32> = (0..resources).map(|_| rng.random_range(1..=6)).collect();
    let list = (0..tasks)
        .map(|i| {
            let demand = capacities
                .iter()
                .map(|&c| rng.random_range(0..=c))
                .collect();
            let mut task = Task::new(rng.random_range(0..=5)).with_demand(demand);
            for j in (i + 1)..tasks {
                if rng.random_bool(0.2) {
                    task = task.with_successor(j);
                }
            }
            task
        })
        .collect();
    Instance::new(list, capacities.into_iter().map(Resource::new).collect()).unwrap()
}
