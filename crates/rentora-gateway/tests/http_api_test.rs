// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that drive the gateway over a real TCP socket.

use std::sync::Arc;

use rentora_core::types::{Principal, Role, RoomStats};
use rentora_dashboard::DashboardAggregator;
use rentora_gateway::auth::{AuthConfig, StaticToken};
use rentora_gateway::server::{build_router, GatewayState, HealthState};
use rentora_test_utils::{
    MockActivityFeedReader, MockAppointmentReader, MockContractStatsReader,
    MockMaintenanceStatsReader, MockRoomStatsReader,
};

fn fixture_aggregator() -> DashboardAggregator {
    DashboardAggregator::new(
        Arc::new(MockRoomStatsReader::returning(RoomStats {
            total: 12,
            vacant: 3,
            revenue_cents: 450_000,
        })),
        Arc::new(MockMaintenanceStatsReader::default()),
        Arc::new(MockContractStatsReader::default()),
        Arc::new(MockActivityFeedReader::default()),
        Arc::new(MockAppointmentReader::default()),
    )
}

fn failing_aggregator() -> DashboardAggregator {
    DashboardAggregator::new(
        Arc::new(MockRoomStatsReader::default()),
        Arc::new(MockMaintenanceStatsReader::default()),
        Arc::new(MockContractStatsReader::failing()),
        Arc::new(MockActivityFeedReader::default()),
        Arc::new(MockAppointmentReader::default()),
    )
}

fn two_role_auth() -> AuthConfig {
    AuthConfig {
        tokens: vec![
            StaticToken {
                token: "admin-secret".to_string(),
                principal: Principal {
                    subject: "alice".to_string(),
                    role: Role::Admin,
                },
            },
            StaticToken {
                token: "staff-secret".to_string(),
                principal: Principal {
                    subject: "bob".to_string(),
                    role: Role::Staff,
                },
            },
        ],
    }
}

async fn spawn_gateway(auth: AuthConfig, aggregator: DashboardAggregator) -> String {
    let state = GatewayState {
        aggregator: Arc::new(aggregator),
        auth,
        health: HealthState {
            start_time: std::time::Instant::now(),
        },
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn health_is_served_without_auth() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("health request");
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.expect("health body");
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert!(body["uptime_secs"].is_u64());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dashboard_without_token_is_unauthorized() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dashboard_with_unknown_token_is_unauthorized() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer wrong-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn gateway_fails_closed_without_configured_tokens() {
    let base = spawn_gateway(AuthConfig::default(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer admin-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn admin_token_receives_snapshot_envelope() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer admin-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.expect("dashboard body");
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(body["message"], "dashboard generated");
    assert_eq!(body["data"]["rooms"]["total"], 12);
    assert_eq!(body["data"]["rooms"]["vacant"], 3);
    assert_eq!(body["data"]["rooms"]["revenue_cents"], 450_000);
    assert!(body["data"]["recent_activity"].as_array().is_some());
    assert!(body["data"]["generated_at"].is_string());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn staff_token_is_forbidden() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer staff-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 403);

    let body: serde_json::Value = resp.json().await.expect("error body");
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(body["message"], "forbidden: administrative role required");
    assert!(body["data"].is_null());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_building_filter_is_bad_request() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard?building=building-7"))
        .header("authorization", "Bearer admin-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = resp.json().await.expect("error body");
    assert_eq!(body["success"], serde_json::json!(false));
    assert!(
        body["message"]
            .as_str()
            .expect("message string")
            .contains("invalid building filter")
    );
    assert!(body["data"].is_null());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn valid_building_filter_is_accepted() {
    let base = spawn_gateway(two_role_auth(), fixture_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!(
            "{base}/v1/dashboard?building=0198f6a2-1111-7000-8000-000000000001"
        ))
        .header("authorization", "Bearer admin-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.expect("dashboard body");
    assert_eq!(body["success"], serde_json::json!(true));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reader_failure_is_reported_as_internal_error() {
    let base = spawn_gateway(two_role_auth(), failing_aggregator()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer admin-secret")
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(resp.status().as_u16(), 500);

    let body: serde_json::Value = resp.json().await.expect("error body");
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(body["message"], "internal error");
    assert!(body["data"].is_null());
}
