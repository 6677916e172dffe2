//! Role scoping by guild page.

use hub_common::{Guild, Role};
use uuid::Uuid;

/// Roles shown on the given page.
///
/// `Some(group)` selects the roles of that sub-page, `None` selects the roles
/// that live on the guild's main page. Input order is preserved.
pub fn select_scoped_roles(roles: &[Role], group_id: Option<Uuid>) -> Vec<&Role> {
    roles.iter().filter(|role| role.group_id == group_id).collect()
}

/// Whether the guild has sub-pages that actually hold roles.
#[must_use]
pub fn has_visible_pages(guild: &Guild) -> bool {
    !guild.groups.is_empty() && guild.roles.iter().any(|role| role.group_id.is_some())
}
