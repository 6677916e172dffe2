//! Evaluation snapshots.
//!
//! A snapshot bundles the guild, viewer and page the hub is evaluated for,
//! as produced by the data layer. Reading and parsing are the only fallible
//! steps; degenerate content is logged and evaluated as given.

use std::collections::HashSet;
use std::path::Path;

use hub_common::{Guild, GuildPlatform, Result, Scope, Viewer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::rewards::{
    plan_access_hub, AccessHubView, CredentialPlacement, HubContext, RewardRegistry,
};

/// Guild, viewer and page of one hub evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub guild: Guild,
    pub viewer: Viewer,
    #[serde(default)]
    pub scope: Scope,
    /// Points platform ids the points pipeline resolved for the viewer.
    #[serde(default)]
    pub accessed_points: Vec<Uuid>,
}

impl Snapshot {
    /// Read a snapshot from a JSON file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(raw)?;
        snapshot.warn_degenerate();

        debug!(
            guild_id = %snapshot.guild.id,
            roles = snapshot.guild.roles.len(),
            platforms = snapshot.guild.guild_platforms.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }

    /// Log content the engine tolerates but the data layer should not produce.
    ///
    /// Nothing is rejected. A scope naming a group the guild does not list is
    /// evaluated as given and simply matches no roles.
    pub fn warn_degenerate(&self) {
        if let Some(group_id) = self.scope.group_id {
            if self.guild.group(group_id).is_none() {
                warn!(%group_id, "Scope refers to a group the guild does not list");
            }
        }

        let mut role_ids = HashSet::new();
        for role in &self.guild.roles {
            if !role_ids.insert(role.id) {
                warn!(role_id = %role.id, "Duplicate role id in snapshot");
            }
        }
    }

    /// Catalogue entries for `accessed_points`.
    ///
    /// Ids that are missing from the catalogue or do not name a points
    /// platform are dropped.
    #[must_use]
    pub fn accessed_points_platforms(&self) -> Vec<&GuildPlatform> {
        self.accessed_points
            .iter()
            .filter_map(|id| {
                let found = self
                    .guild
                    .guild_platforms
                    .iter()
                    .find(|gp| gp.id == *id && gp.platform_id.is_points());
                if found.is_none() {
                    warn!(
                        guild_platform_id = %id,
                        "Accessed points id is not a points platform, ignoring"
                    );
                }
                found
            })
            .collect()
    }

    /// Plan the access hub for this snapshot.
    #[must_use]
    pub fn evaluate(
        &self,
        registry: &RewardRegistry,
        credential_placement: CredentialPlacement,
    ) -> AccessHubView {
        let accessed_points = self.accessed_points_platforms();

        plan_access_hub(&HubContext {
            guild: &self.guild,
            viewer: &self.viewer,
            scope: self.scope,
            accessed_points: &accessed_points,
            registry,
            credential_placement,
        })
    }
}
