//! Guild Hub
//!
//! Decides which role-gated rewards a viewer can see on a guild page.
//! Pure and synchronous: every call recomputes from the snapshots it is given.

pub mod access;
pub mod config;
pub mod rewards;
pub mod snapshot;

pub use access::{
    accessible_platforms, resolve_accessible_platforms, select_scoped_roles,
    should_show_access_hub, should_show_guild_pin,
};
pub use rewards::{plan_access_hub, AccessHubView, CredentialPlacement, RewardRegistry};
