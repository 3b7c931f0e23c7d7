//! Schedule computation entry point.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::interner::TaskId;
use crate::models::Task;
use crate::{log_changes, log_debug};

use super::cycle;
use super::graph::TaskGraph;
use super::passes;
use super::slack;
use super::types::{ScheduleConfig, ScheduleResult, TaskTiming};

/// Errors that can occur while computing a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Task code must not be empty")]
    EmptyCode,
    #[error("Duplicate task code: {0}")]
    DuplicateCode(String),
    #[error("Task {0} must have a duration greater than zero")]
    InvalidDuration(String),
    #[error("Task {code} depends on unknown task {dependency}")]
    UnresolvedDependency { code: String, dependency: String },
    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
    #[error("Negative slack {slack} computed for task {code}")]
    NegativeSlack { code: String, slack: i64 },
}

/// Compute the full CPM schedule for a task collection.
///
/// Stages run strictly in order: graph construction and validation, cycle
/// detection, topological sort, forward pass, backward pass, slack and
/// critical path extraction. Any failure returns before any derived field
/// is produced, so the caller sees either a complete result or an error,
/// never a partial one. The input is treated as an immutable snapshot and
/// is not modified.
pub fn compute_schedule(
    tasks: &[Task],
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    if tasks.is_empty() {
        return Ok(ScheduleResult::default());
    }

    let graph = TaskGraph::build(tasks)?;

    if let Some(cycle_ids) = cycle::find_cycle(&graph) {
        return Err(ScheduleError::CyclicDependency {
            cycle: graph.codes(&cycle_ids),
        });
    }

    let order = passes::topological_sort(&graph)?;
    log_debug!(
        config.verbosity,
        "Topological order: {:?}",
        graph.codes(&order)
    );

    let (earliest_start, earliest_finish) = passes::forward_pass(&graph, &order);
    let project_duration = earliest_finish.iter().copied().max().unwrap_or(0);

    let (latest_start, latest_finish) = passes::backward_pass(&graph, &order, &earliest_finish);

    let (total_slack, free_slack) =
        slack::compute_slack(&graph, &earliest_start, &earliest_finish, &latest_start)?;
    let max_slack = total_slack.iter().copied().max().unwrap_or(0);
    let critical_path = slack::critical_path(&graph, &earliest_start, &total_slack);

    log_changes!(
        config.verbosity,
        "Scheduled {} tasks: project duration {} days, {} critical",
        graph.len(),
        project_duration,
        critical_path.len()
    );

    let mut timings: FxHashMap<String, TaskTiming> =
        FxHashMap::with_capacity_and_hasher(graph.len(), Default::default());
    for id in 0..graph.len() as TaskId {
        let idx = id as usize;
        if let Some(code) = graph.index.resolve(id) {
            timings.insert(
                code.to_string(),
                TaskTiming {
                    earliest_start: earliest_start[idx],
                    earliest_finish: earliest_finish[idx],
                    latest_start: latest_start[idx],
                    latest_finish: latest_finish[idx],
                    total_slack: total_slack[idx],
                    free_slack: free_slack[idx],
                },
            );
        }
    }

    Ok(ScheduleResult {
        timings,
        project_duration,
        max_slack,
        critical_path,
    })
}
