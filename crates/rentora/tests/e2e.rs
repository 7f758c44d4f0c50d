// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete Rentora pipeline.
//!
//! Each test seeds an isolated temp SQLite database, wires the SQLite read
//! services into the dashboard aggregator, and exercises either the
//! aggregator directly or the full HTTP gateway. Tests are independent and
//! order-insensitive.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rentora_config::model::DashboardConfig;
use rentora_core::types::{ActivityKind, Principal, Role};
use rentora_core::{EntityId, RentoraError};
use rentora_dashboard::DashboardAggregator;
use rentora_gateway::auth::{AuthConfig, StaticToken};
use rentora_gateway::server::{build_router, GatewayState, HealthState};
use rentora_storage::queries::seed;
use rentora_storage::{
    AppointmentRecord, Building, CancellationRequest, Contract, Database, MaintenanceTicket,
    Payment, Room, SqliteReadServices,
};

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

fn principal(subject: &str, role: Role) -> Principal {
    Principal {
        subject: subject.to_string(),
        role,
    }
}

/// Seed two buildings and return the id of "Birch House".
///
/// Birch House: room 11 occupied (active contract, one payment, pending
/// ticket), room 12 vacant (ended contract, one payment, pending viewing).
/// Quarry Lofts: room 21 occupied (contract expiring in 15 days, one payment,
/// resolved ticket, cancellation request).
async fn seed_sample(db: &Database) -> EntityId {
    let birch = Building {
        id: EntityId::generate(),
        name: "Birch House".to_string(),
        address: "2 Birch Row".to_string(),
        created_at: days_from_now(-500),
    };
    let quarry = Building {
        id: EntityId::generate(),
        name: "Quarry Lofts".to_string(),
        address: "18 Quarry Road".to_string(),
        created_at: days_from_now(-250),
    };
    seed::insert_building(db, &birch).await.unwrap();
    seed::insert_building(db, &quarry).await.unwrap();

    let room = |building_id, number: &str, rent_cents, status: &str| Room {
        id: EntityId::generate(),
        building_id,
        number: number.to_string(),
        monthly_rent_cents: rent_cents,
        status: status.to_string(),
        created_at: days_from_now(-480),
    };
    let r11 = room(birch.id, "11", 100_000, "occupied");
    let r12 = room(birch.id, "12", 85_000, "vacant");
    let r21 = room(quarry.id, "21", 130_000, "occupied");
    for r in [&r11, &r12, &r21] {
        seed::insert_room(db, r).await.unwrap();
    }

    let contract = |room_id, tenant: &str, starts: i64, ends: i64, status: &str| Contract {
        id: EntityId::generate(),
        room_id,
        tenant_name: tenant.to_string(),
        starts_on: days_from_now(starts),
        ends_on: days_from_now(ends),
        status: status.to_string(),
        created_at: days_from_now(starts),
    };
    let c11 = contract(r11.id, "Tomas Ried", -60, 120, "active");
    let c21 = contract(r21.id, "Aya Kato", -350, 15, "active");
    let c12 = contract(r12.id, "Rosa Marin", -400, -10, "ended");
    for c in [&c11, &c21, &c12] {
        seed::insert_contract(db, c).await.unwrap();
    }

    let payment = |contract_id, amount_cents, paid_days| Payment {
        id: EntityId::generate(),
        contract_id,
        amount_cents,
        paid_at: days_from_now(paid_days),
    };
    for p in [
        payment(c11.id, 100_000, -20),
        payment(c21.id, 130_000, -1),
        payment(c12.id, 85_000, -40),
    ] {
        seed::insert_payment(db, &p).await.unwrap();
    }

    let ticket = |room_id, title: &str, status: &str, opened_days| MaintenanceTicket {
        id: EntityId::generate(),
        room_id,
        title: title.to_string(),
        status: status.to_string(),
        opened_at: days_from_now(opened_days),
        updated_at: days_from_now(opened_days),
    };
    for t in [
        ticket(r11.id, "stuck balcony door", "pending", -4),
        ticket(r21.id, "boiler service", "resolved", -30),
    ] {
        seed::insert_maintenance_ticket(db, &t).await.unwrap();
    }

    seed::insert_cancellation_request(
        db,
        &CancellationRequest {
            id: EntityId::generate(),
            contract_id: c21.id,
            reason: "buying a flat".to_string(),
            requested_at: days_from_now(-1),
        },
    )
    .await
    .unwrap();

    let appointment = |room_id, visitor: &str, scheduled_days, status: &str| AppointmentRecord {
        id: EntityId::generate(),
        room_id,
        visitor_name: visitor.to_string(),
        scheduled_at: days_from_now(scheduled_days),
        status: status.to_string(),
        created_at: days_from_now(-6),
    };
    for a in [
        appointment(r12.id, "Dana Iqbal", 2, "pending"),
        appointment(r12.id, "Leo Brandt", -3, "completed"),
    ] {
        seed::insert_appointment(db, &a).await.unwrap();
    }

    birch.id
}

async fn seeded(dir: &tempfile::TempDir) -> (Database, EntityId) {
    let path = dir.path().join("e2e.db");
    let db = Database::open(path.to_str().unwrap()).await.unwrap();
    let birch = seed_sample(&db).await;
    (db, birch)
}

fn aggregator_over(db: Database) -> DashboardAggregator {
    let services = Arc::new(SqliteReadServices::new(db, &DashboardConfig::default()));
    DashboardAggregator::new(
        services.clone(),
        services.clone(),
        services.clone(),
        services.clone(),
        services,
    )
}

// ---- Test 1: Seeded snapshot for an administrator ----

#[tokio::test]
async fn test_admin_snapshot_aggregates_seeded_storage() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let aggregator = aggregator_over(db);

    let snapshot = aggregator
        .snapshot(&principal("ops", Role::Admin), None)
        .await
        .unwrap();

    assert_eq!(snapshot.rooms.total, 3);
    assert_eq!(snapshot.rooms.vacant, 1);
    assert_eq!(snapshot.rooms.revenue_cents, 315_000);

    assert_eq!(snapshot.maintenance.total, 2);
    assert_eq!(snapshot.maintenance.pending, 1);
    assert_eq!(snapshot.maintenance.in_progress, 0);

    assert_eq!(snapshot.contracts.total, 3);
    assert_eq!(snapshot.contracts.active, 2);
    assert_eq!(snapshot.contracts.expiring_soon, 1);

    assert_eq!(snapshot.recent_activity.len(), 6);
    let kinds: Vec<ActivityKind> = snapshot.recent_activity.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&ActivityKind::Payment));
    assert!(kinds.contains(&ActivityKind::Cancellation));
    assert!(kinds.contains(&ActivityKind::Maintenance));

    assert_eq!(snapshot.pending_appointments.len(), 1);
    assert_eq!(snapshot.pending_appointments[0].visitor_name, "Dana Iqbal");
    assert!(!snapshot.generated_at.is_empty());
}

// ---- Test 2: Authorization gate ----

#[tokio::test]
async fn test_staff_and_tenant_are_denied() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let aggregator = aggregator_over(db);

    for role in [Role::Staff, Role::Tenant] {
        let result = aggregator.snapshot(&principal("visitor", role), None).await;
        assert!(
            matches!(result, Err(RentoraError::Forbidden(_))),
            "{role} must be denied"
        );
    }
}

#[tokio::test]
async fn test_denial_precedes_scope_validation() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let aggregator = aggregator_over(db);

    // A non-admin with a malformed filter gets Forbidden, not Validation.
    let result = aggregator
        .snapshot(&principal("visitor", Role::Staff), Some("not-a-uuid"))
        .await;
    assert!(matches!(result, Err(RentoraError::Forbidden(_))));
}

// ---- Test 3: Scope validation and building scoping ----

#[tokio::test]
async fn test_malformed_scope_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let aggregator = aggregator_over(db);

    let result = aggregator
        .snapshot(&principal("ops", Role::Admin), Some("building-7"))
        .await;
    assert!(matches!(result, Err(RentoraError::Validation(_))));
}

#[tokio::test]
async fn test_unknown_building_yields_empty_sections() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let aggregator = aggregator_over(db);

    let ghost = EntityId::generate().to_string();
    let snapshot = aggregator
        .snapshot(&principal("ops", Role::Admin), Some(&ghost))
        .await
        .unwrap();

    assert_eq!(snapshot.rooms.total, 0);
    assert!(snapshot.recent_activity.is_empty());
    assert!(snapshot.pending_appointments.is_empty());
}

#[tokio::test]
async fn test_building_scope_narrows_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let (db, birch) = seeded(&dir).await;
    let aggregator = aggregator_over(db);

    let scope = birch.to_string();
    let snapshot = aggregator
        .snapshot(&principal("ops", Role::Admin), Some(&scope))
        .await
        .unwrap();

    assert_eq!(snapshot.rooms.total, 2);
    assert_eq!(snapshot.rooms.vacant, 1);
    assert_eq!(snapshot.rooms.revenue_cents, 185_000);

    assert_eq!(snapshot.maintenance.total, 1);
    assert_eq!(snapshot.maintenance.pending, 1);

    assert_eq!(snapshot.contracts.total, 2);
    assert_eq!(snapshot.contracts.active, 1);
    assert_eq!(snapshot.contracts.expiring_soon, 0);

    assert_eq!(snapshot.recent_activity.len(), 3);
    assert!(
        snapshot
            .recent_activity
            .iter()
            .all(|e| !e.description.contains("room 21")),
        "other buildings must not leak into a scoped feed"
    );

    assert_eq!(snapshot.pending_appointments.len(), 1);
}

// ---- Test 4: HTTP gateway over seeded storage ----

async fn spawn_gateway(db: Database) -> String {
    let state = GatewayState {
        aggregator: Arc::new(aggregator_over(db)),
        auth: AuthConfig {
            tokens: vec![StaticToken {
                token: "e2e-admin".to_string(),
                principal: principal("ops", Role::Admin),
            }],
        },
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
async fn test_http_dashboard_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let base = spawn_gateway(db).await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer e2e-admin")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "dashboard generated");
    assert_eq!(body["data"]["rooms"]["total"], 3);
    assert_eq!(body["data"]["rooms"]["revenue_cents"], 315_000);
    assert_eq!(
        body["data"]["pending_appointments"][0]["visitor_name"],
        "Dana Iqbal"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_http_rejects_missing_and_unknown_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let (db, _) = seeded(&dir).await;
    let base = spawn_gateway(db).await;

    let client = reqwest::Client::new();
    let missing = client
        .get(format!("{base}/v1/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 401);

    let unknown = client
        .get(format!("{base}/v1/dashboard"))
        .header("authorization", "Bearer wrong-token")
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), 401);
}
