//! Hub Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::env;
use uuid::Uuid;

use crate::rewards::CredentialPlacement;

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Hub configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is unset (default: "`guild_hub=info`")
    pub log_filter: String,

    /// Log output format (default: pretty)
    pub log_format: LogFormat,

    /// Guilds whose credential card is listed before the platform cards
    pub credential_leading_guilds: HashSet<Uuid>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| "guild_hub=info".into()),
            log_format: match env::var("LOG_FORMAT").ok().as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            credential_leading_guilds: env::var("CREDENTIAL_LEADING_GUILDS")
                .ok()
                .map(|v| parse_guild_ids(&v))
                .transpose()
                .context("CREDENTIAL_LEADING_GUILDS must be a comma-separated list of guild UUIDs")?
                .unwrap_or_default(),
        })
    }

    /// Credential card placement for a guild.
    #[must_use]
    pub fn credential_placement(&self, guild_id: Uuid) -> CredentialPlacement {
        CredentialPlacement::for_guild(guild_id, &self.credential_leading_guilds)
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            log_filter: "guild_hub=debug".into(),
            log_format: LogFormat::Pretty,
            credential_leading_guilds: HashSet::new(),
        }
    }
}

/// Parses a comma-separated list of UUIDs, skipping empty entries.
fn parse_guild_ids(val: &str) -> Result<HashSet<Uuid>> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Uuid::parse_str(s).with_context(|| format!("invalid guild id: {s}")))
        .collect()
}
