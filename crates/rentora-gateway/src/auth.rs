// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication middleware for the gateway.
//!
//! Requests authenticate with a static bearer token
//! (`Authorization: Bearer <token>`). Each configured token maps to a
//! [`Principal`] that is inserted into request extensions for handlers
//! downstream. When no tokens are configured, all requests are rejected
//! (fail-closed).

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use rentora_core::types::Principal;

/// A configured bearer token and the principal it authenticates.
#[derive(Clone)]
pub struct StaticToken {
    /// Exact token value expected on the wire.
    pub token: String,
    /// Principal attached to requests presenting this token.
    pub principal: Principal,
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"[redacted]")
            .field("principal", &self.principal)
            .finish()
    }
}

/// Authentication configuration for the gateway.
///
/// Mirrors the `[auth]` table from `rentora-config` to avoid a dependency
/// on the config crate from the gateway crate.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Configured bearer tokens. Empty means every request is rejected.
    pub tokens: Vec<StaticToken>,
}

impl AuthConfig {
    /// Resolve a presented bearer token to its configured principal.
    pub fn resolve(&self, token: &str) -> Option<Principal> {
        self.tokens
            .iter()
            .find(|t| t.token == token)
            .map(|t| t.principal.clone())
    }
}

/// Middleware that validates the `Authorization: Bearer <token>` header.
///
/// On success the resolved [`Principal`] is stored in request extensions
/// so handlers can read who is calling. If no tokens are configured, all
/// requests are rejected (fail-closed).
pub async fn auth_middleware(
    State(auth): State<AuthConfig>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // If no tokens are configured, reject all requests (fail-closed).
    if auth.tokens.is_empty() {
        tracing::error!("gateway has no auth tokens configured -- rejecting request");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let presented = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if let Some(token) = presented {
        if let Some(principal) = auth.resolve(token) {
            request.extensions_mut().insert(principal);
            return Ok(next.run(request).await);
        }
    }

    Err(StatusCode::UNAUTHORIZED)
}
