//! Rust implementation of the PERT project scheduling engine.
//!
//! This module provides the critical path (CPM) computation: earliest and
//! latest dates, slack, and critical path membership for a dependency graph
//! of tasks. Storage, forms, and rendering stay on the host side; this crate
//! only computes.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use std::collections::HashMap;

pub mod interner;
pub mod logging;
mod models;
pub mod schedule;

pub use models::{ProjectSchedule, Task, TaskSchedule};
pub use schedule::{
    compute_schedule, ScheduleConfig, ScheduleError, ScheduleResult, TaskGraph, TaskTiming,
};

/// Compute the CPM schedule for a project's tasks.
///
/// Validates the task collection, checks the dependency graph is acyclic,
/// then runs the forward pass, backward pass, and slack computation.
///
/// # Arguments
/// * `tasks` - List of tasks with codes, durations, and dependency codes
/// * `verbosity` - Diagnostic trace level (0=silent, 1=changes, 2=debug)
///
/// # Returns
/// * ProjectSchedule with per-task dates, slack, and the critical path
///
/// # Raises
/// * ValueError on duplicate/empty codes, non-positive durations,
///   unresolved dependencies, or a dependency cycle
#[pyfunction]
#[pyo3(name = "compute_schedule", signature = (tasks, verbosity=0))]
fn py_compute_schedule(tasks: Vec<Task>, verbosity: u8) -> PyResult<ProjectSchedule> {
    let config = ScheduleConfig { verbosity };

    match schedule::compute_schedule(&tasks, &config) {
        Ok(result) => Ok(to_project_schedule(result)),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Convert the engine result into the Python-facing schedule type.
fn to_project_schedule(result: ScheduleResult) -> ProjectSchedule {
    let tasks: HashMap<String, TaskSchedule> = result
        .timings
        .into_iter()
        .map(|(code, timing)| {
            let is_critical = timing.is_critical();
            (
                code,
                TaskSchedule {
                    earliest_start: timing.earliest_start,
                    earliest_finish: timing.earliest_finish,
                    latest_start: timing.latest_start,
                    latest_finish: timing.latest_finish,
                    total_slack: timing.total_slack,
                    free_slack: timing.free_slack,
                    is_critical,
                },
            )
        })
        .collect();

    ProjectSchedule {
        tasks,
        project_duration: result.project_duration,
        max_slack: result.max_slack,
        critical_path: result.critical_path,
    }
}

/// The pert.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<TaskSchedule>()?;
    m.add_class::<ProjectSchedule>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_compute_schedule, m)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_conversion() {
        let tasks = vec![
            Task {
                code: "A".to_string(),
                name: "Start".to_string(),
                duration: 5,
                dependencies: vec![],
            },
            Task {
                code: "B".to_string(),
                name: "Finish".to_string(),
                duration: 3,
                dependencies: vec!["A".to_string()],
            },
        ];
        let result = compute_schedule(&tasks, &ScheduleConfig::default()).unwrap();
        let schedule = to_project_schedule(result);

        assert_eq!(schedule.project_duration, 8);
        assert_eq!(schedule.max_slack, 0);
        assert_eq!(schedule.critical_path, vec!["A".to_string(), "B".to_string()]);
        let b = &schedule.tasks["B"];
        assert_eq!(b.earliest_start, 5);
        assert!(b.is_critical);
    }
}
