//! Task model and the progress/status transition rules.
//!
//! A task's `progress`, `status` and `completed` fields are kept in sync by
//! two independent paths: [`Task::adjust_progress`] derives the status from
//! the new progress, and [`Task::set_status`] derives progress from the new
//! status. The two paths treat a move back to [`TaskStatus::Pending`]
//! differently, and neither clears `completed_at` once it has been set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of a task's progress percentage.
pub const MAX_PROGRESS: u8 = 100;

/// Unique identifier for a task.
///
/// Seeded tasks use short ids (`t1`, `t2`, ...); assigned tasks get a
/// time-ordered id generated by [`TaskId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier from a UUID v7.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("t{}", Uuid::now_v7().simple()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Pending,
    /// Partially done.
    InProgress,
    /// Finished; progress is at 100.
    Completed,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A unit of work owned by exactly one team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Display title, never empty.
    pub title: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
    /// Completion percentage in `0..=100`.
    pub progress: u8,
    /// Mirrors `status == Completed` after every transition.
    pub completed: bool,
    /// Last time the task reached completion. Never cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Workflow status.
    #[serde(rename = "taskStatus")]
    pub status: TaskStatus,
}

impl Task {
    /// Creates a freshly assigned task: no progress, pending, never completed.
    #[must_use]
    pub const fn pending(id: TaskId, title: String, due_date: NaiveDate) -> Self {
        Self {
            id,
            title,
            due_date,
            progress: 0,
            completed: false,
            completed_at: None,
            status: TaskStatus::Pending,
        }
    }

    /// Moves progress by `delta`, clamped to `0..=100`, and derives the
    /// status from the resulting value.
    ///
    /// Reaching 100 stamps `completed_at` with `now`, overwriting any
    /// earlier completion time. Dropping to 0 always means pending.
    pub fn adjust_progress(&mut self, delta: i32, now: DateTime<Utc>) {
        let next = i32::from(self.progress)
            .saturating_add(delta)
            .clamp(0, i32::from(MAX_PROGRESS));
        self.progress = u8::try_from(next).unwrap_or(MAX_PROGRESS);

        match self.progress {
            0 => {
                self.status = TaskStatus::Pending;
                self.completed = false;
            }
            MAX_PROGRESS => {
                self.status = TaskStatus::Completed;
                self.completed = true;
                self.completed_at = Some(now);
            }
            _ => {
                self.status = TaskStatus::InProgress;
                self.completed = false;
            }
        }
    }

    /// Sets the status directly and derives `completed` and `progress`.
    ///
    /// Moving to pending only resets progress when it was at 100; partial
    /// progress is kept. Moving to in-progress never touches progress.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            TaskStatus::Completed => {
                self.completed = true;
                self.progress = MAX_PROGRESS;
                self.completed_at = Some(now);
            }
            TaskStatus::Pending => {
                self.completed = false;
                if self.progress == MAX_PROGRESS {
                    self.progress = 0;
                }
            }
            TaskStatus::InProgress => {
                self.completed = false;
            }
        }
    }

    /// Whether the task is still open and its due date lies before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    /// Whether a negative progress step would change anything.
    #[must_use]
    pub const fn can_decrease_progress(&self) -> bool {
        self.progress > 0
    }

    /// Whether a positive progress step would change anything.
    #[must_use]
    pub const fn can_increase_progress(&self) -> bool {
        self.progress < MAX_PROGRESS
    }
}
