use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-wide counts, recomputed on every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_stories: u64,
    pub total_tasks: u64,
    pub pending_tasks: u64,
    pub in_progress_tasks: u64,
    pub completed_tasks: u64,
    pub open_defects: u64,
    pub total_landmines: u64,
}

impl Metrics {
    /// Builds metrics from raw counts.
    ///
    /// `total_tasks` is the sum of the three known status buckets, not a table
    /// count: tasks with any other status are left out.
    pub fn new(
        total_stories: u64,
        pending_tasks: u64,
        in_progress_tasks: u64,
        completed_tasks: u64,
        open_defects: u64,
        total_landmines: u64,
    ) -> Self {
        Self {
            total_stories,
            total_tasks: pending_tasks + in_progress_tasks + completed_tasks,
            pending_tasks,
            in_progress_tasks,
            completed_tasks,
            open_defects,
            total_landmines,
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stories, {} tasks, {} open defects, {} landmines",
            self.total_stories, self.total_tasks, self.open_defects, self.total_landmines
        )
    }
}
