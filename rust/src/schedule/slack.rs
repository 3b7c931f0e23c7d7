//! Slack computation and critical path extraction.

use crate::interner::TaskId;

use super::compute::ScheduleError;
use super::graph::TaskGraph;

/// Compute total and free slack for every task.
///
/// Total slack below zero cannot come from any valid input; it means an
/// upstream pass is broken, so it surfaces as `NegativeSlack` instead of
/// being stored. Returns (total_slack, free_slack) indexed by task id.
pub fn compute_slack(
    graph: &TaskGraph,
    earliest_start: &[i64],
    earliest_finish: &[i64],
    latest_start: &[i64],
) -> Result<(Vec<i64>, Vec<i64>), ScheduleError> {
    let n = graph.len();
    let mut total_slack = vec![0i64; n];
    let mut free_slack = vec![0i64; n];

    for idx in 0..n {
        let total = latest_start[idx] - earliest_start[idx];
        if total < 0 {
            return Err(ScheduleError::NegativeSlack {
                code: graph
                    .index
                    .resolve(idx as TaskId)
                    .unwrap_or_default()
                    .to_string(),
                slack: total,
            });
        }
        total_slack[idx] = total;

        let dependents = &graph.dependents[idx];
        free_slack[idx] = if dependents.is_empty() {
            total
        } else {
            let mut min_dependent_start = i64::MAX;
            for &dependent in dependents {
                let start = earliest_start[dependent as usize];
                if start < min_dependent_start {
                    min_dependent_start = start;
                }
            }
            min_dependent_start - earliest_finish[idx]
        };
    }

    Ok((total_slack, free_slack))
}

/// Extract the critical path: zero-slack tasks ordered by earliest start.
///
/// The sort is stable, so tasks starting at the same time keep their input
/// order. Parallel critical sub-chains of equal length all appear; the
/// result is a set for presentation, not necessarily one contiguous chain.
pub fn critical_path(
    graph: &TaskGraph,
    earliest_start: &[i64],
    total_slack: &[i64],
) -> Vec<String> {
    let mut critical: Vec<TaskId> = (0..graph.len() as TaskId)
        .filter(|&id| total_slack[id as usize] == 0)
        .collect();
    critical.sort_by_key(|&id| earliest_start[id as usize]);
    graph.codes(&critical)
}
