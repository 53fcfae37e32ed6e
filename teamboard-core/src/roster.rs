//! Roster store: the members and their tasks.
//!
//! Every mutation looks up its member (and task) first and returns a
//! [`RosterError`] before touching anything when a lookup fails, so a
//! rejected operation never leaves a partial change behind.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::member::{Member, MemberId, MemberStatus};
use crate::task::{Task, TaskId, TaskStatus};

/// Reasons a roster operation left the roster unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// No member with the given ID.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),
    /// The member exists but owns no task with the given ID.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Task title is empty after trimming.
    #[error("task title cannot be empty")]
    EmptyTitle,
    /// Two members share an ID.
    #[error("duplicate member id: {0}")]
    DuplicateMember(MemberId),
    /// Two tasks share an ID.
    #[error("duplicate task id: {0}")]
    DuplicateTask(TaskId),
}

/// The full collection of members and their tasks.
///
/// Serializes as a plain member list; deserializing goes through
/// [`Roster::from_members`] so duplicate IDs are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Member>", into = "Vec<Member>")]
pub struct Roster {
    members: Vec<Member>,
}

impl TryFrom<Vec<Member>> for Roster {
    type Error = RosterError;

    fn try_from(members: Vec<Member>) -> Result<Self, Self::Error> {
        Self::from_members(members)
    }
}

impl From<Roster> for Vec<Member> {
    fn from(roster: Roster) -> Self {
        roster.members
    }
}

impl Roster {
    /// Builds a roster, rejecting duplicate member or task IDs.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateMember`] or
    /// [`RosterError::DuplicateTask`] on the first repeated ID.
    pub fn from_members(members: Vec<Member>) -> Result<Self, RosterError> {
        let mut member_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for member in &members {
            if !member_ids.insert(&member.id) {
                return Err(RosterError::DuplicateMember(member.id.clone()));
            }
            for task in &member.tasks {
                if !task_ids.insert(&task.id) {
                    return Err(RosterError::DuplicateTask(task.id.clone()));
                }
            }
        }
        Ok(Self { members })
    }

    /// Builds a roster from members already known to have unique IDs.
    pub(crate) const fn from_unique(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// All members in roster order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Looks up a member by ID.
    #[must_use]
    pub fn member(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == member_id)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether any member owns a task with this ID.
    #[must_use]
    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.members.iter().any(|m| m.task(task_id).is_some())
    }

    /// Sets a member's availability status.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MemberNotFound`] if the member does not exist.
    pub fn set_status(
        &mut self,
        member_id: &MemberId,
        status: MemberStatus,
    ) -> Result<(), RosterError> {
        let member = self.member_mut(member_id)?;
        member.status = status;
        Ok(())
    }

    /// Appends a new pending task to a member and returns its ID.
    ///
    /// The title is trimmed. The generated ID is re-drawn until it is unused
    /// anywhere in the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MemberNotFound`] if the member does not exist,
    /// or [`RosterError::EmptyTitle`] if the title is blank.
    pub fn assign_task(
        &mut self,
        member_id: &MemberId,
        title: &str,
        due_date: NaiveDate,
    ) -> Result<TaskId, RosterError> {
        let index = self.member_index(member_id)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(RosterError::EmptyTitle);
        }

        let mut task_id = TaskId::generate();
        while self.contains_task(&task_id) {
            task_id = TaskId::generate();
        }

        self.members[index].tasks.push(Task::pending(
            task_id.clone(),
            title.to_string(),
            due_date,
        ));
        Ok(task_id)
    }

    /// Moves a task's progress by `delta` and re-derives its status.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MemberNotFound`] or [`RosterError::TaskNotFound`]
    /// if either lookup fails.
    pub fn adjust_task_progress(
        &mut self,
        member_id: &MemberId,
        task_id: &TaskId,
        delta: i32,
        now: DateTime<Utc>,
    ) -> Result<&Task, RosterError> {
        let task = self.task_mut(member_id, task_id)?;
        task.adjust_progress(delta, now);
        Ok(&*task)
    }

    /// Sets a task's status and re-derives its progress.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MemberNotFound`] or [`RosterError::TaskNotFound`]
    /// if either lookup fails.
    pub fn set_task_status(
        &mut self,
        member_id: &MemberId,
        task_id: &TaskId,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Result<&Task, RosterError> {
        let task = self.task_mut(member_id, task_id)?;
        task.set_status(status, now);
        Ok(&*task)
    }

    fn member_index(&self, member_id: &MemberId) -> Result<usize, RosterError> {
        self.members
            .iter()
            .position(|m| &m.id == member_id)
            .ok_or_else(|| RosterError::MemberNotFound(member_id.clone()))
    }

    fn member_mut(&mut self, member_id: &MemberId) -> Result<&mut Member, RosterError> {
        let index = self.member_index(member_id)?;
        Ok(&mut self.members[index])
    }

    fn task_mut(&mut self, member_id: &MemberId, task_id: &TaskId) -> Result<&mut Task, RosterError> {
        self.member_mut(member_id)?
            .task_mut(task_id)
            .ok_or_else(|| RosterError::TaskNotFound(task_id.clone()))
    }
}
