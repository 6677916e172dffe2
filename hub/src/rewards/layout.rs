//! Access hub layout.
//!
//! Produces the ordered list of cards the hub renders. Nothing here looks at
//! role ownership; it only arranges what the access engine let through.

use std::collections::HashSet;

use hub_common::{Guild, GuildPlatform, PlatformKind, Scope, Viewer};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::registry::{AccessButton, RewardRegistry};
use crate::access::{
    accessible_platforms, empty_state, should_show_access_hub, should_show_guild_pin, EmptyState,
};

/// Where the guild credential card goes in the hub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialPlacement {
    /// Before every platform card.
    Leading,
    /// After every other card.
    #[default]
    Trailing,
}

impl CredentialPlacement {
    /// Leading for the listed guilds, trailing for everyone else.
    #[must_use]
    pub fn for_guild(guild_id: Uuid, leading_guilds: &HashSet<Uuid>) -> Self {
        if leading_guilds.contains(&guild_id) {
            Self::Leading
        } else {
            Self::Trailing
        }
    }
}

/// Corner control of a platform card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerButton {
    Menu,
    Warning,
}

/// One card in the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HubItem {
    GuildPin,
    PlatformCard {
        guild_platform: GuildPlatform,
        corner: Option<CornerButton>,
        button: AccessButton,
    },
    PointsCard {
        guild_platform_id: Uuid,
    },
    EmptyState {
        state: EmptyState,
    },
}

/// Planned hub: whether it is shown and what it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessHubView {
    pub visible: bool,
    pub items: Vec<HubItem>,
}

impl AccessHubView {
    /// Platform cards in display order.
    pub fn platform_cards(&self) -> impl Iterator<Item = &GuildPlatform> {
        self.items.iter().filter_map(|item| match item {
            HubItem::PlatformCard { guild_platform, .. } => Some(guild_platform),
            _ => None,
        })
    }
}

/// Inputs of a hub evaluation.
#[derive(Debug, Clone, Copy)]
pub struct HubContext<'a> {
    pub guild: &'a Guild,
    pub viewer: &'a Viewer,
    pub scope: Scope,
    /// Points platforms the points pipeline resolved for this viewer.
    pub accessed_points: &'a [&'a GuildPlatform],
    pub registry: &'a RewardRegistry,
    pub credential_placement: CredentialPlacement,
}

/// Plan the access hub for a viewer.
#[tracing::instrument(
    level = "debug",
    skip(ctx),
    fields(guild_id = %ctx.guild.id, scope = ?ctx.scope.group_id)
)]
pub fn plan_access_hub(ctx: &HubContext<'_>) -> AccessHubView {
    let HubContext {
        guild,
        viewer,
        scope,
        accessed_points,
        registry,
        credential_placement,
    } = *ctx;

    let accessed = accessible_platforms(guild, viewer, scope);
    let show_pin = should_show_guild_pin(guild, viewer, scope);
    let visible = should_show_access_hub(guild, viewer, scope, &accessed);

    let mut items = Vec::with_capacity(accessed.len() + accessed_points.len() + 2);

    if show_pin && credential_placement == CredentialPlacement::Leading {
        items.push(HubItem::GuildPin);
    }

    for gp in &accessed {
        let Some(caps) = registry.get(gp.platform_id) else {
            debug!(
                guild_platform_id = %gp.id,
                kind = ?gp.platform_id,
                "No renderer for platform kind, skipping"
            );
            continue;
        };

        let corner = if viewer.is_privileged && guild.is_detailed && caps.card_menu {
            Some(CornerButton::Menu)
        } else if caps.card_warning {
            Some(CornerButton::Warning)
        } else {
            None
        };

        items.push(HubItem::PlatformCard {
            guild_platform: (*gp).clone(),
            corner,
            button: caps.access_button,
        });
    }

    items.extend(
        accessed_points
            .iter()
            .filter(|gp| gp.platform_id == PlatformKind::Points)
            .map(|gp| HubItem::PointsCard {
                guild_platform_id: gp.id,
            }),
    );

    if let Some(state) = empty_state(guild, viewer, scope, &accessed, accessed_points, show_pin) {
        items.push(HubItem::EmptyState { state });
    }

    if show_pin && credential_placement == CredentialPlacement::Trailing {
        items.push(HubItem::GuildPin);
    }

    debug!(visible, items = items.len(), "Planned access hub");

    AccessHubView { visible, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_common::{FeatureFlags, GuildPin, Role, RolePlatform};

    fn platform(kind: PlatformKind) -> GuildPlatform {
        GuildPlatform {
            id: Uuid::new_v4(),
            platform_id: kind,
            platform_guild_id: "remote".to_string(),
        }
    }

    fn guild_with(platforms: Vec<GuildPlatform>) -> (Guild, Uuid) {
        let role_id = Uuid::new_v4();
        let mut guild: Guild =
            serde_json::from_value(serde_json::json!({ "id": Uuid::new_v4() })).unwrap();
        guild.roles.push(Role {
            id: role_id,
            name: "Member".to_string(),
            group_id: None,
            role_platforms: platforms
                .iter()
                .map(|gp| RolePlatform {
                    guild_platform_id: gp.id,
                })
                .collect(),
        });
        guild.guild_platforms = platforms;
        guild.onboarding_complete = true;
        (guild, role_id)
    }

    fn ctx<'a>(
        guild: &'a Guild,
        viewer: &'a Viewer,
        registry: &'a RewardRegistry,
        credential_placement: CredentialPlacement,
    ) -> HubContext<'a> {
        HubContext {
            guild,
            viewer,
            scope: Scope::main_page(),
            accessed_points: &[],
            registry,
            credential_placement,
        }
    }

    #[test]
    fn test_credential_placement_for_guild() {
        let special = Uuid::new_v4();
        let leading: HashSet<Uuid> = [special].into_iter().collect();

        assert_eq!(CredentialPlacement::for_guild(special, &leading), CredentialPlacement::Leading);
        assert_eq!(
            CredentialPlacement::for_guild(Uuid::new_v4(), &leading),
            CredentialPlacement::Trailing
        );
    }

    #[test]
    fn test_kind_without_renderer_is_skipped() {
        let unknown = platform(PlatformKind::Unknown);
        let discord = platform(PlatformKind::Discord);
        let (guild, role_id) = guild_with(vec![unknown, discord.clone()]);
        let viewer = Viewer::member([role_id]);
        let registry = RewardRegistry::builtin();

        let view = plan_access_hub(&ctx(&guild, &viewer, &registry, CredentialPlacement::Trailing));

        let cards: Vec<Uuid> = view.platform_cards().map(|gp| gp.id).collect();
        assert_eq!(cards, vec![discord.id]);
        assert!(view.visible);
    }

    #[test]
    fn test_corner_button_menu_for_detailed_admin() {
        let discord = platform(PlatformKind::Discord);
        let (mut guild, _) = guild_with(vec![discord]);
        let registry = RewardRegistry::builtin();
        let admin = Viewer::admin([]);
        let member_role = guild.roles[0].id;
        let member = Viewer::member([member_role]);

        guild.is_detailed = true;
        let view = plan_access_hub(&ctx(&guild, &admin, &registry, CredentialPlacement::Trailing));
        assert!(matches!(
            view.items[0],
            HubItem::PlatformCard { corner: Some(CornerButton::Menu), .. }
        ));

        // Members get the warning badge instead
        let view = plan_access_hub(&ctx(&guild, &member, &registry, CredentialPlacement::Trailing));
        assert!(matches!(
            view.items[0],
            HubItem::PlatformCard { corner: Some(CornerButton::Warning), .. }
        ));

        // Admin without the detailed payload also falls back
        guild.is_detailed = false;
        let view = plan_access_hub(&ctx(&guild, &admin, &registry, CredentialPlacement::Trailing));
        assert!(matches!(
            view.items[0],
            HubItem::PlatformCard { corner: Some(CornerButton::Warning), .. }
        ));
    }

    #[test]
    fn test_no_corner_without_capability() {
        let twitter = platform(PlatformKind::Twitter);
        let (guild, role_id) = guild_with(vec![twitter]);
        let viewer = Viewer::member([role_id]);
        let registry = RewardRegistry::builtin();

        let view = plan_access_hub(&ctx(&guild, &viewer, &registry, CredentialPlacement::Trailing));

        assert_eq!(
            view.items,
            vec![HubItem::PlatformCard {
                guild_platform: guild.guild_platforms[0].clone(),
                corner: None,
                button: AccessButton::Default,
            }]
        );
    }

    #[test]
    fn test_guild_pin_placement() {
        let discord = platform(PlatformKind::Discord);
        let (mut guild, role_id) = guild_with(vec![discord]);
        guild.feature_flags = FeatureFlags::GUILD_CREDENTIAL;
        guild.guild_pin = Some(GuildPin { is_active: true });
        let viewer = Viewer::member([role_id]);
        let registry = RewardRegistry::builtin();

        let trailing =
            plan_access_hub(&ctx(&guild, &viewer, &registry, CredentialPlacement::Trailing));
        assert_eq!(trailing.items.last(), Some(&HubItem::GuildPin));
        assert!(matches!(trailing.items[0], HubItem::PlatformCard { .. }));

        let leading =
            plan_access_hub(&ctx(&guild, &viewer, &registry, CredentialPlacement::Leading));
        assert_eq!(leading.items.first(), Some(&HubItem::GuildPin));
        assert_eq!(leading.items.len(), 2);
    }

    #[test]
    fn test_points_cards_follow_platforms() {
        let discord = platform(PlatformKind::Discord);
        let points = platform(PlatformKind::Points);
        let (guild, role_id) = guild_with(vec![discord]);
        let viewer = Viewer::member([role_id]);
        let registry = RewardRegistry::builtin();
        let accessed_points = [&points];

        let view = plan_access_hub(&HubContext {
            accessed_points: &accessed_points,
            ..ctx(&guild, &viewer, &registry, CredentialPlacement::Trailing)
        });

        assert_eq!(view.items.len(), 2);
        assert_eq!(
            view.items[1],
            HubItem::PointsCard {
                guild_platform_id: points.id
            }
        );
    }

    #[test]
    fn test_empty_state_for_member_without_rewards() {
        let discord = platform(PlatformKind::Discord);
        let (guild, _) = guild_with(vec![discord]);
        let viewer = Viewer::member([]);
        let registry = RewardRegistry::builtin();

        let view = plan_access_hub(&ctx(&guild, &viewer, &registry, CredentialPlacement::Trailing));

        assert!(view.visible);
        assert_eq!(
            view.items,
            vec![HubItem::EmptyState {
                state: EmptyState::NoAccessedReward
            }]
        );
    }

    #[test]
    fn test_view_serializes_tagged_items() {
        let view = AccessHubView {
            visible: true,
            items: vec![
                HubItem::GuildPin,
                HubItem::EmptyState {
                    state: EmptyState::NoRewardsYet,
                },
            ],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["items"][0]["type"], "guild_pin");
        assert_eq!(json["items"][1]["type"], "empty_state");
        assert_eq!(json["items"][1]["state"], "no_rewards_yet");
    }
}
