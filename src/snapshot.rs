use crate::model::{Defect, Landmine, Metrics, Story, StoryStatus, Task, TaskCounts, TaskStatus};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The full exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub last_updated: DateTime<Local>,
    pub stories: Vec<Story>,
    pub tasks: Vec<Task>,
    pub defects: Vec<Defect>,
    pub landmines: Vec<Landmine>,
    pub metrics: Metrics,
}

impl Snapshot {
    /// Assembles a snapshot, filling in every story's task-derived fields.
    pub fn build(
        mut stories: Vec<Story>,
        tasks: Vec<Task>,
        defects: Vec<Defect>,
        landmines: Vec<Landmine>,
        metrics: Metrics,
        last_updated: DateTime<Local>,
    ) -> Self {
        apply_task_progress(&mut stories, &tasks);
        Self {
            last_updated,
            stories,
            tasks,
            defects,
            landmines,
            metrics,
        }
    }

    /// One-line human readable count summary.
    pub fn summary(&self) -> String {
        self.metrics.to_string()
    }
}

/// Tallies tasks into the per-story buckets. Unknown statuses count only
/// towards `total`.
pub fn count_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskCounts {
    let mut counts = TaskCounts::default();
    for task in tasks {
        counts.total += 1;
        match task.status {
            TaskStatus::Completed => counts.completed += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Pending => counts.pending += 1,
            TaskStatus::Other(_) => {}
        }
    }
    counts
}

/// Percentage of completed tasks, rounded to one decimal with ties to even
/// (1 of 16 is 6.2). Zero with no tasks.
pub fn progress(counts: &TaskCounts) -> f64 {
    if counts.total == 0 {
        return 0.0;
    }
    let percent = counts.completed as f64 / counts.total as f64 * 100.0;
    (percent * 10.0).round_ties_even() / 10.0
}

pub fn story_status(counts: &TaskCounts) -> StoryStatus {
    if counts.total > 0 && counts.completed == counts.total {
        StoryStatus::Completed
    } else if counts.in_progress > 0 {
        StoryStatus::InProgress
    } else {
        StoryStatus::Pending
    }
}

fn apply_task_progress(stories: &mut [Story], tasks: &[Task]) {
    let mut by_story: HashMap<i64, Vec<&Task>> = HashMap::new();
    for task in tasks {
        if let Some(story_id) = task.story_id {
            by_story.entry(story_id).or_default().push(task);
        }
    }

    for story in stories {
        let counts = count_tasks(by_story.get(&story.id).into_iter().flatten().copied());
        story.progress = progress(&counts);
        story.status = story_status(&counts);
        story.task_counts = counts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, story_id: Option<i64>, status: &str) -> Task {
        Task {
            id,
            story_id,
            story_message: None,
            description: format!("task {}", id),
            status: TaskStatus::from(status.to_string()),
            timestamp: None,
        }
    }

    fn build(stories: Vec<Story>, tasks: Vec<Task>) -> Snapshot {
        Snapshot::build(stories, tasks, vec![], vec![], Metrics::default(), Local::now())
    }

    #[test]
    fn test_story_without_tasks_is_pending() {
        let snapshot = build(vec![Story::new(1, "Lonely".to_string(), None)], vec![]);
        let story = &snapshot.stories[0];

        assert_eq!(story.progress, 0.0);
        assert_eq!(story.status, StoryStatus::Pending);
        assert_eq!(story.task_counts, TaskCounts::default());
    }

    #[test]
    fn test_half_done_story() {
        let snapshot = build(
            vec![Story::new(1, "Build login".to_string(), None)],
            vec![task(1, Some(1), "completed"), task(2, Some(1), "pending")],
        );
        let story = &snapshot.stories[0];

        assert_eq!(story.progress, 50.0);
        // Not every task is done and none is in progress
        assert_eq!(story.status, StoryStatus::Pending);
        assert_eq!(
            story.task_counts,
            TaskCounts {
                total: 2,
                completed: 1,
                in_progress: 0,
                pending: 1,
            }
        );
    }

    #[test]
    fn test_all_completed_story() {
        let snapshot = build(
            vec![Story::new(1, "Ship".to_string(), None)],
            vec![task(1, Some(1), "completed"), task(2, Some(1), "completed")],
        );
        let story = &snapshot.stories[0];

        assert_eq!(story.progress, 100.0);
        assert_eq!(story.status, StoryStatus::Completed);
    }

    #[test]
    fn test_any_in_progress_task_marks_story_in_progress() {
        let snapshot = build(
            vec![Story::new(1, "Refactor".to_string(), None)],
            vec![
                task(1, Some(1), "in_progress"),
                task(2, Some(1), "pending"),
                task(3, Some(1), "pending"),
            ],
        );
        let story = &snapshot.stories[0];

        assert_eq!(story.status, StoryStatus::InProgress);
        assert_eq!(story.progress, 0.0);
    }

    #[test]
    fn test_progress_rounds_to_one_decimal() {
        let counts = TaskCounts {
            total: 3,
            completed: 1,
            in_progress: 0,
            pending: 2,
        };
        assert_eq!(progress(&counts), 33.3);

        let counts = TaskCounts {
            total: 3,
            completed: 2,
            in_progress: 0,
            pending: 1,
        };
        assert_eq!(progress(&counts), 66.7);
    }

    #[test]
    fn test_progress_halves_round_to_even() {
        let sixteenths = |completed| TaskCounts {
            total: 16,
            completed,
            in_progress: 0,
            pending: 16 - completed,
        };

        assert_eq!(progress(&sixteenths(1)), 6.2);
        assert_eq!(progress(&sixteenths(5)), 31.2);
        assert_eq!(progress(&sixteenths(9)), 56.2);
        assert_eq!(progress(&sixteenths(13)), 81.2);
        assert_eq!(progress(&sixteenths(3)), 18.8);
    }

    #[test]
    fn test_unknown_status_counts_towards_total_only() {
        let snapshot = build(
            vec![Story::new(1, "Blocked".to_string(), None)],
            vec![task(1, Some(1), "completed"), task(2, Some(1), "blocked")],
        );
        let story = &snapshot.stories[0];

        assert_eq!(story.task_counts.total, 2);
        assert_eq!(story.task_counts.completed, 1);
        assert_eq!(story.task_counts.pending, 0);
        assert_eq!(story.progress, 50.0);
        assert_eq!(story.status, StoryStatus::Pending);
    }

    #[test]
    fn test_tasks_only_match_their_own_story() {
        let snapshot = build(
            vec![
                Story::new(1, "A".to_string(), None),
                Story::new(2, "B".to_string(), None),
            ],
            vec![
                task(1, Some(1), "completed"),
                task(2, Some(2), "pending"),
                task(3, None, "in_progress"),
            ],
        );

        assert_eq!(snapshot.stories[0].status, StoryStatus::Completed);
        assert_eq!(snapshot.stories[1].status, StoryStatus::Pending);
        assert_eq!(snapshot.stories[1].task_counts.total, 1);
    }

    #[test]
    fn test_document_shape() {
        let snapshot = build(vec![], vec![]);
        let value = serde_json::to_value(&snapshot).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        for key in ["lastUpdated", "stories", "tasks", "defects", "landmines", "metrics"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(keys.len(), 6);
    }
}
