//! Reward presentation planning.
//!
//! The access engine decides which integrations pass; this module decides
//! which of them have a card and in what order the hub lists them.

pub mod layout;
pub mod registry;

pub use layout::{
    plan_access_hub, AccessHubView, CornerButton, CredentialPlacement, HubContext, HubItem,
};
pub use registry::{AccessButton, RewardCapabilities, RewardRegistry};
