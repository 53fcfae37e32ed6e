//! Commands accepted by the [`Store`](crate::store::Store).

use chrono::NaiveDate;

use crate::member::{MemberId, MemberStatus};
use crate::roster::RosterError;
use crate::session::Role;
use crate::task::{TaskId, TaskStatus};

/// Every state change the dashboard can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch between the lead and member dashboards.
    SwitchRole(Role),
    /// Focus a member. The ID is not validated.
    SelectMember(MemberId),
    /// Change a member's availability status.
    SetStatus {
        /// Target member.
        member_id: MemberId,
        /// New status.
        status: MemberStatus,
    },
    /// Assign a new pending task to a member.
    AssignTask {
        /// Target member.
        member_id: MemberId,
        /// Task title; blank titles are ignored.
        title: String,
        /// Due date.
        due_date: NaiveDate,
    },
    /// Move a task's progress by a signed step.
    AdjustTaskProgress {
        /// Owning member.
        member_id: MemberId,
        /// Target task.
        task_id: TaskId,
        /// Percentage points to add (may be negative).
        delta: i32,
    },
    /// Set a task's status directly.
    SetTaskStatus {
        /// Owning member.
        member_id: MemberId,
        /// Target task.
        task_id: TaskId,
        /// New status.
        status: TaskStatus,
    },
}

impl Command {
    /// Short name used in log events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SwitchRole(_) => "switch_role",
            Self::SelectMember(_) => "select_member",
            Self::SetStatus { .. } => "set_status",
            Self::AssignTask { .. } => "assign_task",
            Self::AdjustTaskProgress { .. } => "adjust_task_progress",
            Self::SetTaskStatus { .. } => "set_task_status",
        }
    }
}

/// Result of dispatching a [`Command`].
///
/// An ignored command left the store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed (or idempotently re-set) the state.
    Applied,
    /// The command referenced something missing and was dropped.
    Ignored(RosterError),
}

impl Outcome {
    /// Whether the command took effect.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
