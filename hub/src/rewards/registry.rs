//! Reward registry: what each platform kind can render.

use std::collections::HashMap;

use hub_common::PlatformKind;
use serde::Serialize;

/// Button shown at the bottom of a platform card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessButton {
    /// Generic "join / connect" button.
    Default,
    /// Kind-specific action (claim, mint, fill form...).
    Custom,
}

/// Card capabilities of a platform kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardCapabilities {
    /// Admin menu in the card corner.
    pub card_menu: bool,
    /// Warning badge in the card corner (e.g. missing bot permissions).
    pub card_warning: bool,
    pub access_button: AccessButton,
}

impl RewardCapabilities {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            card_menu: false,
            card_warning: false,
            access_button: AccessButton::Default,
        }
    }

    #[must_use]
    pub const fn with_menu(mut self) -> Self {
        self.card_menu = true;
        self
    }

    #[must_use]
    pub const fn with_warning(mut self) -> Self {
        self.card_warning = true;
        self
    }

    #[must_use]
    pub const fn with_custom_button(mut self) -> Self {
        self.access_button = AccessButton::Custom;
        self
    }
}

/// Mapping from platform kind to card capabilities.
///
/// A kind without an entry has no card; its platforms still pass the access
/// filter but are left out of the hub.
#[derive(Debug, Clone, Default)]
pub struct RewardRegistry {
    entries: HashMap<PlatformKind, RewardCapabilities>,
}

impl RewardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock registry for the platforms shipped with the hub.
    #[must_use]
    pub fn builtin() -> Self {
        let plain = RewardCapabilities::plain();

        Self::new()
            .with(PlatformKind::Discord, plain.with_menu().with_warning())
            .with(PlatformKind::Telegram, plain.with_menu())
            .with(PlatformKind::Github, plain.with_menu())
            .with(PlatformKind::Google, plain.with_menu())
            .with(PlatformKind::Twitter, plain)
            .with(PlatformKind::ContractCall, plain.with_menu().with_custom_button())
            .with(PlatformKind::Poap, plain.with_menu().with_custom_button())
            .with(PlatformKind::Form, plain.with_custom_button())
            .with(PlatformKind::UniqueText, plain.with_menu().with_custom_button())
            .with(PlatformKind::Text, plain.with_menu().with_custom_button())
            .with(PlatformKind::GatherTown, plain.with_menu().with_custom_button())
            .with(PlatformKind::Polygon, plain.with_menu())
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, kind: PlatformKind, capabilities: RewardCapabilities) -> Self {
        self.register(kind, capabilities);
        self
    }

    /// Register or replace the capabilities of a kind.
    pub fn register(&mut self, kind: PlatformKind, capabilities: RewardCapabilities) {
        self.entries.insert(kind, capabilities);
    }

    #[must_use]
    pub fn get(&self, kind: PlatformKind) -> Option<&RewardCapabilities> {
        self.entries.get(&kind)
    }

    #[must_use]
    pub fn has_renderer(&self, kind: PlatformKind) -> bool {
        self.entries.contains_key(&kind)
    }
}
