//! Core data types for the PERT engine.

use pyo3::prelude::*;
use std::collections::HashMap;

// Note: We use std HashMap here for PyO3 interface compatibility

/// A task supplied by the caller.
///
/// `code` is the task's sole external identity within one scheduling run;
/// it is normalized to uppercase before the graph is built, as are the
/// codes in `dependencies`.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Task {
    #[pyo3(get, set)]
    pub code: String,
    #[pyo3(get, set)]
    pub name: String,
    /// Duration in whole days. Must be greater than zero.
    #[pyo3(get, set)]
    pub duration: i64,
    /// Codes of tasks that must finish before this one starts.
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (code, duration, dependencies, name=None))]
    fn new(code: String, duration: i64, dependencies: Vec<String>, name: Option<String>) -> Self {
        Self {
            code,
            name: name.unwrap_or_default(),
            duration,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(code={:?}, duration={}, deps={})",
            self.code,
            self.duration,
            self.dependencies.len()
        )
    }
}

/// Computed dates and slack for one task.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct TaskSchedule {
    #[pyo3(get, set)]
    pub earliest_start: i64,
    #[pyo3(get, set)]
    pub earliest_finish: i64,
    #[pyo3(get, set)]
    pub latest_start: i64,
    #[pyo3(get, set)]
    pub latest_finish: i64,
    #[pyo3(get, set)]
    pub total_slack: i64,
    #[pyo3(get, set)]
    pub free_slack: i64,
    #[pyo3(get, set)]
    pub is_critical: bool,
}

#[pymethods]
impl TaskSchedule {
    #[new]
    #[allow(clippy::too_many_arguments)]
    fn new(
        earliest_start: i64,
        earliest_finish: i64,
        latest_start: i64,
        latest_finish: i64,
        total_slack: i64,
        free_slack: i64,
        is_critical: bool,
    ) -> Self {
        Self {
            earliest_start,
            earliest_finish,
            latest_start,
            latest_finish,
            total_slack,
            free_slack,
            is_critical,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskSchedule(es={}, ef={}, ls={}, lf={}, total_slack={}, free_slack={}, critical={})",
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.total_slack,
            self.free_slack,
            self.is_critical
        )
    }
}

/// Full schedule for one project.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct ProjectSchedule {
    /// Per-task schedules keyed by normalized task code.
    #[pyo3(get, set)]
    pub tasks: HashMap<String, TaskSchedule>,
    /// Earliest possible completion of the whole project.
    #[pyo3(get, set)]
    pub project_duration: i64,
    /// Largest total slack across all tasks.
    #[pyo3(get, set)]
    pub max_slack: i64,
    /// Critical task codes ordered by earliest start.
    #[pyo3(get, set)]
    pub critical_path: Vec<String>,
}

#[pymethods]
impl ProjectSchedule {
    #[new]
    #[pyo3(signature = (tasks=None, project_duration=0, max_slack=0, critical_path=None))]
    fn new(
        tasks: Option<HashMap<String, TaskSchedule>>,
        project_duration: i64,
        max_slack: i64,
        critical_path: Option<Vec<String>>,
    ) -> Self {
        Self {
            tasks: tasks.unwrap_or_default(),
            project_duration,
            max_slack,
            critical_path: critical_path.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ProjectSchedule(tasks={}, project_duration={}, critical_path={})",
            self.tasks.len(),
            self.project_duration,
            self.critical_path.len()
        )
    }
}
