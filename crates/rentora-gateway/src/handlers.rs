// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles GET /health and GET /v1/dashboard.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use rentora_core::types::Principal;
use rentora_core::RentoraError;

use crate::envelope::ApiResponse;
use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// Query parameters for GET /v1/dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    /// Optional building id narrowing every dashboard section.
    #[serde(default)]
    pub building: Option<String>,
}

/// GET /health
///
/// Public liveness probe reporting version and uptime. Served without
/// authentication so process supervisors can poll it.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}

/// GET /v1/dashboard
///
/// Builds the operations dashboard snapshot for the authenticated
/// principal, optionally narrowed to one building via the `building`
/// query parameter.
pub async fn get_dashboard(
    State(state): State<GatewayState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<DashboardParams>,
) -> Response {
    match state
        .aggregator
        .snapshot(&principal, params.building.as_deref())
        .await
    {
        Ok(snapshot) => (
            StatusCode::OK,
            Json(ApiResponse::ok("dashboard generated".to_string(), snapshot)),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Map a domain error onto its HTTP status and envelope body.
///
/// Authorization failures and rejected filters carry their message to the
/// caller; anything else is logged and reported as an opaque 500.
fn error_response(err: RentoraError) -> Response {
    let (status, message) = match &err {
        RentoraError::Forbidden(_) => (StatusCode::FORBIDDEN, err.to_string()),
        RentoraError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        _ => {
            tracing::error!("dashboard request failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            )
        }
    };
    (status, Json(ApiResponse::error(message))).into_response()
}
