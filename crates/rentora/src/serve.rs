// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rentora serve` command implementation.
//!
//! Starts the HTTP gateway backed by SQLite storage: opens the database
//! (running migrations), wires the SQLite read services into the dashboard
//! aggregator, and serves until the process exits.

use std::sync::Arc;

use tracing::info;

use rentora_config::model::{RentoraConfig, TokenEntry};
use rentora_core::types::Principal;
use rentora_core::RentoraError;
use rentora_dashboard::DashboardAggregator;
use rentora_gateway::auth::{AuthConfig, StaticToken};
use rentora_gateway::server::{start_server, GatewayState, HealthState, ServerConfig};
use rentora_storage::{Database, SqliteReadServices};

/// Runs the `rentora serve` command.
pub async fn run_serve(config: RentoraConfig) -> Result<(), RentoraError> {
    init_tracing(&config.server.log_level);

    info!("starting rentora serve");

    // Fail-closed: refuse to start with no auth tokens configured.
    if config.auth.tokens.is_empty() {
        return Err(RentoraError::Config(
            "gateway requires at least one [[auth.tokens]] entry".to_string(),
        ));
    }

    let db = Database::open(&config.storage.database_path).await?;
    info!(path = config.storage.database_path.as_str(), "storage ready");

    let services = Arc::new(SqliteReadServices::new(db, &config.dashboard));
    let aggregator = DashboardAggregator::new(
        services.clone(),
        services.clone(),
        services.clone(),
        services.clone(),
        services,
    );

    let state = GatewayState {
        aggregator: Arc::new(aggregator),
        auth: AuthConfig {
            tokens: static_tokens(&config.auth.tokens),
        },
        health: HealthState {
            start_time: std::time::Instant::now(),
        },
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    start_server(&server_config, state).await
}

/// Convert configured token entries into the gateway's auth table.
fn static_tokens(entries: &[TokenEntry]) -> Vec<StaticToken> {
    entries
        .iter()
        .map(|entry| StaticToken {
            token: entry.token.clone(),
            principal: Principal {
                subject: entry.subject.clone(),
                role: entry.role,
            },
        })
        .collect()
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rentora={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
