//! Types for schedule computation.

use rustc_hash::FxHashMap;

/// Configuration for a schedule computation.
#[derive(Clone, Debug, Default)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=debug.
    pub verbosity: u8,
}

/// Per-task timing information computed by the forward and backward passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    /// Earliest possible start (from forward pass).
    pub earliest_start: i64,
    /// Earliest possible finish (from forward pass).
    pub earliest_finish: i64,
    /// Latest allowable start (from backward pass).
    pub latest_start: i64,
    /// Latest allowable finish (from backward pass).
    pub latest_finish: i64,
    /// Total slack = latest_start - earliest_start.
    pub total_slack: i64,
    /// Free slack = delay tolerated without moving any direct dependent.
    pub free_slack: i64,
}

impl TaskTiming {
    pub fn is_critical(&self) -> bool {
        self.total_slack == 0
    }
}

/// Fully annotated schedule for one task collection.
///
/// The input tasks are never mutated; all derived fields live here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleResult {
    /// Timing information for each task, keyed by normalized code.
    pub timings: FxHashMap<String, TaskTiming>,
    /// Earliest possible completion of the whole project (max earliest finish).
    pub project_duration: i64,
    /// Largest total slack across all tasks (0 when every task is critical).
    pub max_slack: i64,
    /// Codes of critical tasks ordered by earliest start.
    pub critical_path: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_critical() {
        let timing = TaskTiming {
            earliest_start: 0,
            earliest_finish: 5,
            latest_start: 0,
            latest_finish: 5,
            total_slack: 0,
            free_slack: 0,
        };
        assert!(timing.is_critical());

        let timing_with_slack = TaskTiming {
            earliest_start: 0,
            earliest_finish: 5,
            latest_start: 2,
            latest_finish: 7,
            total_slack: 2,
            free_slack: 2,
        };
        assert!(!timing_with_slack.is_critical());
    }

    #[test]
    fn test_config_default_silent() {
        let config = ScheduleConfig::default();
        assert_eq!(config.verbosity, crate::logging::VERBOSITY_SILENT);
    }
}
