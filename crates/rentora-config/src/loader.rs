// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./rentora.toml` > `~/.config/rentora/rentora.toml`
//! > `/etc/rentora/rentora.toml` with environment variable overrides via the
//! `RENTORA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RentoraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/rentora/rentora.toml` (system-wide)
/// 3. `~/.config/rentora/rentora.toml` (user XDG config)
/// 4. `./rentora.toml` (local directory)
/// 5. `RENTORA_*` environment variables
pub fn load_config() -> Result<RentoraConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and inline configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RentoraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RentoraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RentoraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RentoraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for
/// diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RentoraConfig::default()))
        .merge(Toml::file("/etc/rentora/rentora.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("rentora/rentora.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("rentora.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `RENTORA_STORAGE_DATABASE_PATH` must map
/// to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("RENTORA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: RENTORA_SERVER_LOG_LEVEL -> "server_log_level"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("auth_", "auth.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("dashboard_", "dashboard.", 1);
        mapped.into()
    })
}
