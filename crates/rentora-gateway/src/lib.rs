// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the rental operations backend.
//!
//! Serves a public liveness endpoint and the authenticated dashboard API.
//! Authentication uses static bearer tokens resolved to principals; the
//! dashboard itself is produced by `rentora-dashboard` and returned inside
//! a uniform `{ success, message, data }` envelope.

pub mod auth;
pub mod envelope;
pub mod handlers;
pub mod server;

pub use auth::{AuthConfig, StaticToken};
pub use envelope::ApiResponse;
pub use server::{start_server, GatewayState, HealthState, ServerConfig};
