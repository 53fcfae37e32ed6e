//! Read-only summaries derived from roster snapshots.
//!
//! These back the dashboard's count cards, member list filtering and
//! sorting, and the selected-member fallback.

use crate::member::{Member, MemberId, MemberStatus};
use crate::task::Task;

/// Number of members in each availability status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Members currently working.
    pub working: usize,
    /// Members on a break.
    pub on_break: usize,
    /// Members in a meeting.
    pub meeting: usize,
    /// Members offline.
    pub offline: usize,
}

impl StatusCounts {
    /// Count for a single status.
    #[must_use]
    pub const fn get(&self, status: MemberStatus) -> usize {
        match status {
            MemberStatus::Working => self.working,
            MemberStatus::Break => self.on_break,
            MemberStatus::Meeting => self.meeting,
            MemberStatus::Offline => self.offline,
        }
    }

    /// Sum over all statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.working + self.on_break + self.meeting + self.offline
    }
}

/// Counts members per availability status.
#[must_use]
pub fn status_counts(members: &[Member]) -> StatusCounts {
    members
        .iter()
        .fold(StatusCounts::default(), |mut counts, member| {
            match member.status {
                MemberStatus::Working => counts.working += 1,
                MemberStatus::Break => counts.on_break += 1,
                MemberStatus::Meeting => counts.meeting += 1,
                MemberStatus::Offline => counts.offline += 1,
            }
            counts
        })
}

/// Task totals for one member. Active means not completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// All tasks.
    pub total: usize,
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Tallies a task list.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }
}

/// Which members the lead's member list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemberFilter {
    /// Every member.
    #[default]
    All,
    /// Only members with this status.
    Status(MemberStatus),
}

impl MemberFilter {
    /// Whether a member passes the filter.
    #[must_use]
    pub fn matches(self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => member.status == status,
        }
    }

    /// Cycles All -> Working -> Break -> Meeting -> Offline -> All.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Status(MemberStatus::Working),
            Self::Status(MemberStatus::Working) => Self::Status(MemberStatus::Break),
            Self::Status(MemberStatus::Break) => Self::Status(MemberStatus::Meeting),
            Self::Status(MemberStatus::Meeting) => Self::Status(MemberStatus::Offline),
            Self::Status(MemberStatus::Offline) => Self::All,
        }
    }
}

impl std::fmt::Display for MemberFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All Status"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

/// Ordering of the lead's member list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemberSort {
    /// Alphabetical by name, case-insensitive.
    #[default]
    Name,
    /// Most active tasks first.
    ActiveTasks,
}

impl MemberSort {
    /// Switches between the two orderings.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Name => Self::ActiveTasks,
            Self::ActiveTasks => Self::Name,
        }
    }
}

impl std::fmt::Display for MemberSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "Sort by Name"),
            Self::ActiveTasks => write!(f, "Sort by Active Tasks"),
        }
    }
}

/// Applies a filter and a stable sort to the member list.
#[must_use]
pub fn filter_and_sort(members: &[Member], filter: MemberFilter, sort: MemberSort) -> Vec<&Member> {
    let mut visible: Vec<&Member> = members.iter().filter(|m| filter.matches(m)).collect();
    match sort {
        MemberSort::Name => visible.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
        MemberSort::ActiveTasks => {
            visible.sort_by(|a, b| b.task_counts().active.cmp(&a.task_counts().active));
        }
    }
    visible
}

/// Resolves the selected member, falling back to the first roster entry
/// when the selection does not match anyone.
///
/// Returns `None` only for an empty roster.
#[must_use]
pub fn resolve_member<'a>(members: &'a [Member], selected: &MemberId) -> Option<&'a Member> {
    members
        .iter()
        .find(|m| &m.id == selected)
        .or_else(|| members.first())
}
