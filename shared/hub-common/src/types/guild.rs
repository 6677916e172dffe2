//! Guild Types

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::platform::{GuildPlatform, RolePlatform};

bitflags! {
    /// Guild-level feature toggles.
    ///
    /// Serialized by flag name (e.g. `"GUILD_CREDENTIAL | CRM"`). Only
    /// `GUILD_CREDENTIAL` affects the hub; the other names are accepted so
    /// that guild data carrying them still parses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct FeatureFlags: u32 {
        /// Guild may issue a guild-wide credential (guild pin).
        const GUILD_CREDENTIAL = 1 << 0;
        const CRM              = 1 << 1;
        const ROLE_GROUPS      = 1 << 2;
        const PAYMENT          = 1 << 3;
    }
}

/// A guild sub-page grouping a subset of roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGroup {
    pub id: Uuid,
    pub name: String,
    pub url_name: String,
}

/// A membership tier within a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    /// Sub-page this role lives on. `None` means the guild's main page.
    #[serde(default)]
    pub group_id: Option<Uuid>,
    #[serde(default)]
    pub role_platforms: Vec<RolePlatform>,
}

impl Role {
    /// Ids of the guild platforms this role links to, in link order.
    pub fn guild_platform_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.role_platforms.iter().map(|rp| rp.guild_platform_id)
    }
}

/// The guild-wide credential reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildPin {
    pub is_active: bool,
}

/// Everything the access engine needs to know about a guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guild {
    pub id: Uuid,
    #[serde(default = "FeatureFlags::empty")]
    pub feature_flags: FeatureFlags,
    #[serde(default)]
    pub groups: Vec<RoleGroup>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub guild_platforms: Vec<GuildPlatform>,
    #[serde(default)]
    pub onboarding_complete: bool,
    /// Whether the detailed (admin-capable) guild payload was loaded.
    #[serde(default)]
    pub is_detailed: bool,
    #[serde(default)]
    pub guild_pin: Option<GuildPin>,
}

impl Guild {
    /// Look up a role by id.
    #[must_use]
    pub fn role(&self, role_id: Uuid) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Look up a sub-page by id.
    #[must_use]
    pub fn group(&self, group_id: Uuid) -> Option<&RoleGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    #[must_use]
    pub const fn has_feature(&self, flag: FeatureFlags) -> bool {
        self.feature_flags.contains(flag)
    }

    /// Whether the credential reward exists and is switched on.
    #[must_use]
    pub fn guild_pin_active(&self) -> bool {
        self.guild_pin.as_ref().is_some_and(|pin| pin.is_active)
    }
}
