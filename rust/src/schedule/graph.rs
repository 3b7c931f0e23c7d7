//! Task graph construction and validation.

use crate::interner::{CodeInterner, TaskId};
use crate::models::Task;

use super::compute::ScheduleError;

/// Validated dependency graph over one task collection.
///
/// Codes are interned to dense ids in input order; all vectors are indexed
/// by `TaskId`. The `dependents` relation is the transpose of `deps`,
/// derived here so the two views can never disagree. Ids are internal and
/// never appear in results.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    pub index: CodeInterner,
    /// Task durations in days, indexed by task id.
    pub durations: Vec<i64>,
    /// Direct dependencies (predecessors), indexed by task id.
    pub deps: Vec<Vec<TaskId>>,
    /// Direct dependents (successors), indexed by task id.
    pub dependents: Vec<Vec<TaskId>>,
}

impl TaskGraph {
    /// Build and validate the graph for a task collection.
    ///
    /// Codes are normalized to uppercase before uniqueness and reference
    /// checks, so `a` and `A` denote the same task. The caller's records
    /// are not mutated.
    pub fn build(tasks: &[Task]) -> Result<Self, ScheduleError> {
        let mut index = CodeInterner::with_capacity(tasks.len());

        for task in tasks {
            let code = task.code.to_uppercase();
            if code.is_empty() {
                return Err(ScheduleError::EmptyCode);
            }
            if task.duration <= 0 {
                return Err(ScheduleError::InvalidDuration(code));
            }
            if index.get(&code).is_some() {
                return Err(ScheduleError::DuplicateCode(code));
            }
            index.intern(&code);
        }

        let n = index.len();
        let mut durations = vec![0i64; n];
        let mut deps: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<TaskId>> = vec![Vec::new(); n];

        for (idx, task) in tasks.iter().enumerate() {
            let id = idx as TaskId;
            durations[idx] = task.duration;

            for dep_code in &task.dependencies {
                let dep_norm = dep_code.to_uppercase();
                let Some(dep_id) = index.get(&dep_norm) else {
                    return Err(ScheduleError::UnresolvedDependency {
                        code: task.code.to_uppercase(),
                        dependency: dep_norm,
                    });
                };
                // Dependencies are a set; a code listed twice is one edge
                if !deps[idx].contains(&dep_id) {
                    deps[idx].push(dep_id);
                    dependents[dep_id as usize].push(id);
                }
            }
        }

        Ok(Self {
            index,
            durations,
            deps,
            dependents,
        })
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Resolve a list of interned ids back to their codes.
    pub fn codes(&self, ids: &[TaskId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.index.resolve(id))
            .map(str::to_string)
            .collect()
    }
}
