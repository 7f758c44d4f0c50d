// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, non-empty token values, and
//! positive dashboard windows.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::RentoraConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RentoraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate server.host is not empty and looks like an IP or hostname.
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "server.host `{host}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if config.server.port == 0 {
        errors.push(ConfigError::Validation {
            message: "server.port must not be 0".to_string(),
        });
    }

    // Validate database_path is not empty.
    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    // Validate dashboard windows are positive.
    if config.dashboard.activity_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "dashboard.activity_limit must be at least 1".to_string(),
        });
    }

    if config.dashboard.expiring_within_days == 0 {
        errors.push(ConfigError::Validation {
            message: "dashboard.expiring_within_days must be at least 1".to_string(),
        });
    }

    // Validate token entries: non-empty values, no duplicate tokens.
    let mut seen_tokens = HashSet::new();
    for (i, entry) in config.auth.tokens.iter().enumerate() {
        if entry.token.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("auth.tokens[{i}].token must not be empty"),
            });
        }
        if entry.subject.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("auth.tokens[{i}].subject must not be empty"),
            });
        }
        if !entry.token.trim().is_empty() && !seen_tokens.insert(&entry.token) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate token value in [[auth.tokens]] (subject `{}`)",
                    entry.subject
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
