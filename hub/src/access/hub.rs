//! Access hub show/hide and empty-state decisions.

use hub_common::{Guild, GuildPlatform, Scope, Viewer};
use serde::Serialize;

use super::scope::has_visible_pages;

/// Empty-state card variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Main page: the viewer is in, but no role grants an auto-managed reward.
    NoAccessedReward,
    /// Sub-page: the page has no auto-managed rewards yet.
    NoRewardsYet,
}

impl EmptyState {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NoAccessedReward => "No accessed reward",
            Self::NoRewardsYet => "No rewards yet",
        }
    }
}

/// Whether the access hub is shown at all.
///
/// Shown when any of:
/// - the viewer is an admin of an onboarded guild, or a plain member
/// - the viewer can access at least one platform and onboarding is complete
/// - the guild has populated sub-pages and the main page is open
#[must_use]
pub fn should_show_access_hub(
    guild: &Guild,
    viewer: &Viewer,
    scope: Scope,
    accessed_platforms: &[&GuildPlatform],
) -> bool {
    let base = if viewer.is_privileged {
        guild.onboarding_complete
    } else {
        viewer.is_member
    };

    base
        || (!accessed_platforms.is_empty() && guild.onboarding_complete)
        || (has_visible_pages(guild) && scope.is_main_page())
}

/// Empty-state card to show, if any.
///
/// Only for members and admins, only when nothing else would be in the hub.
/// On the main page it is suppressed while the guild has sub-pages.
#[must_use]
pub fn empty_state(
    guild: &Guild,
    viewer: &Viewer,
    scope: Scope,
    accessed_platforms: &[&GuildPlatform],
    accessed_points: &[&GuildPlatform],
    guild_pin_visible: bool,
) -> Option<EmptyState> {
    let page_allows = !scope.is_main_page() || guild.groups.is_empty();

    let show = (viewer.is_member || viewer.is_privileged)
        && page_allows
        && !guild_pin_visible
        && accessed_platforms.is_empty()
        && accessed_points.is_empty();

    if !show {
        return None;
    }

    Some(if scope.is_main_page() {
        EmptyState::NoAccessedReward
    } else {
        EmptyState::NoRewardsYet
    })
}
