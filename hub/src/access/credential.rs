//! Guild credential (guild pin) visibility.

use hub_common::{FeatureFlags, Guild, Scope, Viewer};

/// Whether the guild credential card is shown.
///
/// Only ever on the main page, and only for guilds with the credential
/// feature. Members see it once the credential is active; admins always see
/// it so they can set it up.
#[must_use]
pub fn should_show_guild_pin(guild: &Guild, viewer: &Viewer, scope: Scope) -> bool {
    scope.is_main_page()
        && guild.has_feature(FeatureFlags::GUILD_CREDENTIAL)
        && ((viewer.is_member && guild.guild_pin_active()) || viewer.is_privileged)
}
