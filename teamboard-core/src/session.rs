//! Session store: active role and selected member.
//!
//! Both fields are independent and accept any value. A selected member ID is
//! not checked against the roster; readers resolve a dangling selection with
//! [`resolve_member`](crate::summary::resolve_member).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::member::MemberId;

/// Which dashboard the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Team lead: whole-team overview and task assignment.
    #[default]
    Lead,
    /// Team member: one member's status and tasks.
    Member,
}

impl Role {
    /// The other role.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Lead => Self::Member,
            Self::Member => Self::Lead,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lead => write!(f, "lead"),
            Self::Member => write!(f, "member"),
        }
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0} (expected \"lead\" or \"member\")")]
pub struct ParseRoleError(String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lead" => Ok(Self::Lead),
            "member" => Ok(Self::Member),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Transient, unpersisted view selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    current_role: Role,
    selected_member_id: MemberId,
}

impl Session {
    /// Creates a session with the given role and selection.
    #[must_use]
    pub const fn new(current_role: Role, selected_member_id: MemberId) -> Self {
        Self {
            current_role,
            selected_member_id,
        }
    }

    /// The active role.
    #[must_use]
    pub const fn current_role(&self) -> Role {
        self.current_role
    }

    /// The selected member ID, which may not exist in the roster.
    #[must_use]
    pub const fn selected_member_id(&self) -> &MemberId {
        &self.selected_member_id
    }

    /// Sets the active role.
    pub const fn switch_role(&mut self, role: Role) {
        self.current_role = role;
    }

    /// Sets the selected member without validation.
    pub fn select_member(&mut self, member_id: MemberId) {
        self.selected_member_id = member_id;
    }
}

/// A roster member as listed in the session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberRef {
    /// Member ID.
    pub id: MemberId,
    /// Display name.
    pub name: String,
}

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// The active role.
    pub current_role: Role,
    /// The selected member ID.
    pub selected_member_id: MemberId,
    /// Every roster member, in roster order.
    pub team_members: Vec<TeamMemberRef>,
}
