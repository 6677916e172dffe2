//! Platform Types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of third-party integration behind a guild platform.
///
/// Tags the front end does not know yet deserialize to [`PlatformKind::Unknown`]
/// so that a newer catalogue never breaks an older engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformKind {
    Discord,
    Telegram,
    Github,
    Google,
    Twitter,
    /// On-chain contract call trigger. Visible to every viewer as a preview.
    ContractCall,
    /// Guild points. Resolved by the points pipeline, never by the platform filter.
    Points,
    Poap,
    Form,
    UniqueText,
    Text,
    GatherTown,
    Polygon,
    #[serde(other)]
    Unknown,
}

impl PlatformKind {
    /// Contract calls bypass role gating.
    #[must_use]
    pub const fn is_contract_call(self) -> bool {
        matches!(self, Self::ContractCall)
    }

    #[must_use]
    pub const fn is_points(self) -> bool {
        matches!(self, Self::Points)
    }
}

/// A configured integration owned by a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildPlatform {
    pub id: Uuid,
    pub platform_id: PlatformKind,
    /// Identifier of the guild on the third-party side (server id, folder id...).
    pub platform_guild_id: String,
}

/// Link granting a role's holders access to a guild platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePlatform {
    pub guild_platform_id: Uuid,
}
