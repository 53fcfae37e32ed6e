//! The single state container holding the roster and session slices.
//!
//! All mutation goes through [`Store::dispatch`]. Commands are applied one at
//! a time in call order; a command that references a missing member or task
//! is logged and dropped without touching state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::command::{Command, Outcome};
use crate::member::Member;
use crate::roster::{Roster, RosterError};
use crate::seed;
use crate::session::{Session, SessionSnapshot, TeamMemberRef};
use crate::summary::resolve_member;
use crate::task::TaskStatus;

/// Owns the roster, the session and the clock used for completion times.
#[derive(Debug, Clone)]
pub struct Store<C = SystemClock> {
    roster: Roster,
    session: Session,
    clock: C,
}

/// Serializable snapshot of the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot<'a> {
    /// Members and their tasks.
    pub members: &'a [Member],
    /// Session selection plus the team member list.
    pub role: SessionSnapshot,
}

impl Store<SystemClock> {
    /// A store loaded with the seed dataset and the system clock.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::roster(), seed::session(), SystemClock)
    }
}

impl<C: Clock> Store<C> {
    /// Creates a store from its parts.
    pub const fn new(roster: Roster, session: Session, clock: C) -> Self {
        Self {
            roster,
            session,
            clock,
        }
    }

    /// Applies a command.
    ///
    /// Never fails: missing members or tasks yield [`Outcome::Ignored`] and
    /// leave the state untouched.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let name = command.name();
        match self.apply(command) {
            Ok(()) => {
                tracing::debug!(command = name, "command applied");
                Outcome::Applied
            }
            Err(error) => {
                tracing::debug!(command = name, %error, "command ignored");
                Outcome::Ignored(error)
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<(), RosterError> {
        match command {
            Command::SwitchRole(role) => {
                self.session.switch_role(role);
                Ok(())
            }
            Command::SelectMember(member_id) => {
                self.session.select_member(member_id);
                Ok(())
            }
            Command::SetStatus { member_id, status } => self.roster.set_status(&member_id, status),
            Command::AssignTask {
                member_id,
                title,
                due_date,
            } => {
                let task_id = self.roster.assign_task(&member_id, &title, due_date)?;
                tracing::info!(member = %member_id, task = %task_id, %due_date, "task assigned");
                Ok(())
            }
            Command::AdjustTaskProgress {
                member_id,
                task_id,
                delta,
            } => {
                let now = self.clock.now();
                let task = self
                    .roster
                    .adjust_task_progress(&member_id, &task_id, delta, now)?;
                if task.status == TaskStatus::Completed {
                    tracing::info!(member = %member_id, task = %task_id, "task completed");
                }
                Ok(())
            }
            Command::SetTaskStatus {
                member_id,
                task_id,
                status,
            } => {
                let now = self.clock.now();
                self.roster
                    .set_task_status(&member_id, &task_id, status, now)?;
                if status == TaskStatus::Completed {
                    tracing::info!(member = %member_id, task = %task_id, "task completed");
                }
                Ok(())
            }
        }
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The roster slice.
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The session slice.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Session fields plus the `(id, name)` of every member.
    pub fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_role: self.session.current_role(),
            selected_member_id: self.session.selected_member_id().clone(),
            team_members: self
                .roster
                .members()
                .iter()
                .map(|m| TeamMemberRef {
                    id: m.id.clone(),
                    name: m.name.clone(),
                })
                .collect(),
        }
    }

    /// Snapshot of both slices, suitable for serialization.
    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            members: self.roster.members(),
            role: self.session_snapshot(),
        }
    }

    /// The selected member, or the first member if the selection dangles.
    pub fn selected_member(&self) -> Option<&Member> {
        resolve_member(self.roster.members(), self.session.selected_member_id())
    }
}
