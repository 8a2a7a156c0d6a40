use super::types::{DefectStatus, StoryStatus, TaskStatus};
use serde::{Deserialize, Serialize};

/// A story row plus the fields derived from its tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: i64,
    pub message: String,
    pub timestamp: Option<String>,

    #[serde(default)]
    pub status: StoryStatus,

    #[serde(default)]
    pub progress: f64,

    #[serde(default)]
    pub task_counts: TaskCounts,
}

impl Story {
    /// A story as loaded, before any task-derived fields are filled in.
    pub fn new(id: i64, message: String, timestamp: Option<String>) -> Self {
        Self {
            id,
            message,
            timestamp,
            status: StoryStatus::default(),
            progress: 0.0,
            task_counts: TaskCounts::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub story_id: Option<i64>,
    pub story_message: Option<String>,
    pub description: String,
    pub status: TaskStatus,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub id: i64,
    pub story_id: Option<i64>,
    pub task_id: Option<i64>,
    pub story_message: Option<String>,
    pub task_description: Option<String>,
    pub description: String,
    pub status: DefectStatus,
    pub timestamp: Option<String>,
}

/// A recorded failure pattern tied to a task and the session it happened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmine {
    pub id: i64,
    pub task_id: i64,
    pub session_id: String,
    pub task_description: Option<String>,
    pub story_message: Option<String>,
    pub error_context: String,
    pub attempted_fixes: String,
    pub timestamp: Option<String>,
}
