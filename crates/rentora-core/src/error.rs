// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Rentora rental management backend.

use thiserror::Error;

/// The primary error type used across all Rentora crates.
#[derive(Debug, Error)]
pub enum RentoraError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller lacks the role required for an operation.
    ///
    /// The message never discloses whether a requested resource exists.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Malformed caller input (bad scope filter, unparseable identifier).
    #[error("validation error: {0}")]
    Validation(String),

    /// An underlying read service failed. Wraps and forwards the cause.
    #[error("data access error: {source}")]
    DataAccess {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// HTTP server lifecycle errors (bind failure, serve loop exit).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RentoraError {
    /// Wrap any error as a [`RentoraError::DataAccess`].
    pub fn data_access<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RentoraError::DataAccess {
            source: Box::new(source),
        }
    }
}
