// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Rentora backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use rentora_core::Role;
use serde::{Deserialize, Serialize};

/// Top-level Rentora configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RentoraConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Bearer-token authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Dashboard aggregation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bearer-token authentication configuration.
///
/// Tokens are issued out of band; this section only maps known token values
/// to principals. An empty table means every request is rejected
/// (fail-closed).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Static token table, each entry resolving to one principal.
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

/// One configured bearer token and the principal it resolves to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    /// The bearer token value presented in the Authorization header.
    pub token: String,
    /// Identity the token authenticates as.
    pub subject: String,
    /// Role granted to that identity (admin, staff, tenant).
    pub role: Role,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "rentora.db".to_string()
}

/// Dashboard aggregation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Maximum number of entries in the recent-activity feed.
    #[serde(default = "default_activity_limit")]
    pub activity_limit: u32,

    /// Window in days within which an active contract counts as
    /// expiring soon.
    #[serde(default = "default_expiring_within_days")]
    pub expiring_within_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            activity_limit: default_activity_limit(),
            expiring_within_days: default_expiring_within_days(),
        }
    }
}

fn default_activity_limit() -> u32 {
    20
}

fn default_expiring_within_days() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = RentoraConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_level, "info");
        assert!(config.auth.tokens.is_empty());
        assert_eq!(config.storage.database_path, "rentora.db");
        assert_eq!(config.dashboard.activity_limit, 20);
        assert_eq!(config.dashboard.expiring_within_days, 30);
    }

    #[test]
    fn token_entry_parses_role() {
        let toml_str = r#"
[[auth.tokens]]
token = "secret-1"
subject = "ops"
role = "admin"

[[auth.tokens]]
token = "secret-2"
subject = "front-desk"
role = "staff"
"#;
        let config: RentoraConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.auth.tokens.len(), 2);
        assert_eq!(config.auth.tokens[0].role, Role::Admin);
        assert_eq!(config.auth.tokens[1].subject, "front-desk");
        assert_eq!(config.auth.tokens[1].role, Role::Staff);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let toml_str = r#"
[[auth.tokens]]
token = "secret-1"
subject = "ops"
role = "superuser"
"#;
        assert!(toml::from_str::<RentoraConfig>(toml_str).is_err());
    }

    #[test]
    fn sections_deny_unknown_fields() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
prot = 9000
"#;
        assert!(toml::from_str::<RentoraConfig>(toml_str).is_err());
    }
}
