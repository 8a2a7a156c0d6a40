use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow state as written by the producer.
///
/// The store keeps statuses as free text, so anything outside the known set is
/// carried through verbatim in [`TaskStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Matching is exact: the metric queries compare the raw column, and the
// per-story counts must agree with them.
impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => TaskStatus::Pending,
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum DefectStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Other(String),
}

impl DefectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DefectStatus::Open => "open",
            DefectStatus::InProgress => "in_progress",
            DefectStatus::Resolved => "resolved",
            DefectStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for DefectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DefectStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => DefectStatus::Open,
            "in_progress" => DefectStatus::InProgress,
            "resolved" => DefectStatus::Resolved,
            _ => DefectStatus::Other(s),
        }
    }
}

impl From<DefectStatus> for String {
    fn from(status: DefectStatus) -> Self {
        match status {
            DefectStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Story state derived from its tasks. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryStatus::Pending => write!(f, "pending"),
            StoryStatus::InProgress => write!(f, "in_progress"),
            StoryStatus::Completed => write!(f, "completed"),
        }
    }
}
