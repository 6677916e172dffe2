//! Viewer Types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What is known about the roles a viewer holds.
///
/// `Unresolved` (e.g. wallet not connected yet) and `Resolved` with an empty
/// set filter differently, so the two are never collapsed into an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "role_ids", rename_all = "snake_case")]
pub enum RoleMembership {
    Unresolved,
    Resolved(HashSet<Uuid>),
}

impl RoleMembership {
    pub fn resolved(role_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self::Resolved(role_ids.into_iter().collect())
    }

    /// `None` while membership is unresolved.
    #[must_use]
    pub const fn role_ids(&self) -> Option<&HashSet<Uuid>> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(ids) => Some(ids),
        }
    }
}

/// The user looking at the guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub membership: RoleMembership,
    #[serde(default)]
    pub is_member: bool,
    /// Guild admin or owner.
    #[serde(default)]
    pub is_privileged: bool,
}

impl Viewer {
    /// A visitor whose membership has not been determined.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            membership: RoleMembership::Unresolved,
            is_member: false,
            is_privileged: false,
        }
    }

    /// An ordinary member holding the given roles.
    pub fn member(role_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            membership: RoleMembership::resolved(role_ids),
            is_member: true,
            is_privileged: false,
        }
    }

    /// A guild admin holding the given roles.
    pub fn admin(role_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            membership: RoleMembership::resolved(role_ids),
            is_member: true,
            is_privileged: true,
        }
    }
}

/// Which page of the guild is being viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Sub-page id. `None` is the guild's main page.
    #[serde(default)]
    pub group_id: Option<Uuid>,
}

impl Scope {
    #[must_use]
    pub const fn main_page() -> Self {
        Self { group_id: None }
    }

    #[must_use]
    pub const fn group(group_id: Uuid) -> Self {
        Self {
            group_id: Some(group_id),
        }
    }

    #[must_use]
    pub const fn is_main_page(&self) -> bool {
        self.group_id.is_none()
    }
}
