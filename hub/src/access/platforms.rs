//! Platform access filter.
//!
//! Resolution order:
//! 1. Collect the guild platforms linked from the roles of the current page
//! 2. Privileged viewers see all of them
//! 3. Viewers with unresolved membership see only contract calls
//! 4. Everyone else sees the platforms their roles link to, plus contract calls
//!
//! Points platforms never pass this filter; the points pipeline owns them.

use std::collections::HashSet;

use hub_common::{Guild, GuildPlatform, Role, Scope, Viewer};
use tracing::debug;
use uuid::Uuid;

use super::scope::select_scoped_roles;

/// Platforms the viewer can access on the given page of a guild.
#[tracing::instrument(level = "debug", skip(guild, viewer), fields(guild_id = %guild.id))]
pub fn accessible_platforms<'a>(
    guild: &'a Guild,
    viewer: &Viewer,
    scope: Scope,
) -> Vec<&'a GuildPlatform> {
    let scoped_roles = select_scoped_roles(&guild.roles, scope.group_id);
    let platforms =
        resolve_accessible_platforms(&scoped_roles, &guild.roles, &guild.guild_platforms, viewer);

    debug!(
        scoped_roles = scoped_roles.len(),
        accessible = platforms.len(),
        "Resolved accessible platforms"
    );

    platforms
}

/// Filter the platform catalogue down to what the viewer can access.
///
/// `scoped_roles` decides which platforms are relevant to the page;
/// `all_roles` is the full role list the viewer's role ids are matched against.
/// The result keeps catalogue order and holds each platform id at most once.
/// Links to ids missing from the catalogue are ignored.
pub fn resolve_accessible_platforms<'a>(
    scoped_roles: &[&Role],
    all_roles: &[Role],
    platforms: &'a [GuildPlatform],
    viewer: &Viewer,
) -> Vec<&'a GuildPlatform> {
    let relevant = relevant_platforms(scoped_roles, platforms);

    if viewer.is_privileged {
        return relevant;
    }

    let Some(role_ids) = viewer.membership.role_ids() else {
        return contract_call_platforms(&relevant);
    };

    let accessed_ids: HashSet<Uuid> = all_roles
        .iter()
        .filter(|role| role_ids.contains(&role.id))
        .flat_map(Role::guild_platform_ids)
        .collect();

    relevant
        .into_iter()
        .filter(|gp| accessed_ids.contains(&gp.id) || gp.platform_id.is_contract_call())
        .collect()
}

/// Contract call platforms among `platforms`, in order.
///
/// These are shown to every viewer, members or not, so on-chain gated
/// rewards can be previewed.
pub fn contract_call_platforms<'a>(platforms: &[&'a GuildPlatform]) -> Vec<&'a GuildPlatform> {
    platforms
        .iter()
        .copied()
        .filter(|gp| gp.platform_id.is_contract_call())
        .collect()
}

/// Catalogue entries linked from `scoped_roles`, excluding points.
fn relevant_platforms<'a>(
    scoped_roles: &[&Role],
    platforms: &'a [GuildPlatform],
) -> Vec<&'a GuildPlatform> {
    let linked_ids: HashSet<Uuid> = scoped_roles
        .iter()
        .flat_map(|role| role.guild_platform_ids())
        .collect();

    // First occurrence wins if the catalogue repeats an id
    let mut seen = HashSet::new();
    platforms
        .iter()
        .filter(|gp| linked_ids.contains(&gp.id) && !gp.platform_id.is_points())
        .filter(|gp| seen.insert(gp.id))
        .collect()
}
