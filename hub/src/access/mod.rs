//! Access resolution for guild rewards.
//!
//! Three independent decisions feed the access hub:
//! - Platforms: which guild platforms the viewer's roles unlock on the current page
//! - Credential: whether the guild-wide credential card is shown
//! - Hub: whether the hub is shown at all, and whether it shows an empty state

pub mod credential;
pub mod hub;
pub mod platforms;
pub mod scope;

pub use credential::should_show_guild_pin;
pub use hub::{empty_state, should_show_access_hub, EmptyState};
pub use platforms::{accessible_platforms, contract_call_platforms, resolve_accessible_platforms};
pub use scope::{has_visible_pages, select_scoped_roles};
