//! Team member model.

use serde::{Deserialize, Serialize};

use crate::summary::TaskCounts;
use crate::task::{Task, TaskId};

/// Unique identifier for a team member, stable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Availability status of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    /// Actively working.
    Working,
    /// On a break.
    Break,
    /// In a meeting.
    Meeting,
    /// Not available.
    Offline,
}

impl MemberStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [Self::Working, Self::Break, Self::Meeting, Self::Offline];
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Working => write!(f, "Working"),
            Self::Break => write!(f, "Break"),
            Self::Meeting => write!(f, "Meeting"),
            Self::Offline => write!(f, "Offline"),
        }
    }
}

/// A team member and the tasks assigned to them, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Current availability.
    pub status: MemberStatus,
    /// Owned tasks, oldest first.
    pub tasks: Vec<Task>,
}

impl Member {
    /// Creates a member with no tasks.
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, status: MemberStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            tasks: Vec::new(),
        }
    }

    /// Appends a task, builder style.
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Looks up one of this member's tasks.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    pub(crate) fn task_mut(&mut self, task_id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == task_id)
    }

    /// Total, active and completed task counts.
    #[must_use]
    pub fn task_counts(&self) -> TaskCounts {
        TaskCounts::of(&self.tasks)
    }
}
