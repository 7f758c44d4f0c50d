// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rentora seed` command implementation.
//!
//! Populates an empty database with a small demonstration dataset: two
//! buildings, six rooms, four contracts with payment history, maintenance
//! tickets, a cancellation request, and viewing appointments. A database
//! that already contains buildings is left untouched.

use chrono::{Duration, Utc};

use rentora_config::model::RentoraConfig;
use rentora_core::{EntityId, RentoraError};
use rentora_storage::queries::seed::{
    building_count, insert_appointment, insert_building, insert_cancellation_request,
    insert_contract, insert_maintenance_ticket, insert_payment, insert_room,
};
use rentora_storage::{
    AppointmentRecord, Building, CancellationRequest, Contract, Database, MaintenanceTicket,
    Payment, Room,
};

/// Runs the `rentora seed` command.
pub async fn run_seed(config: RentoraConfig) -> Result<(), RentoraError> {
    let db = Database::open(&config.storage.database_path).await?;

    if building_count(&db).await? > 0 {
        eprintln!("Database already contains buildings; skipping seed");
        return Ok(());
    }

    seed_demo_dataset(&db).await?;
    eprintln!(
        "Seed complete: 2 buildings, 6 rooms, 4 contracts written to {}",
        config.storage.database_path
    );

    Ok(())
}

/// Insert the demonstration dataset.
///
/// Timestamps are relative to the current clock so contract expiry and
/// recent-activity ordering stay meaningful whenever the seed runs.
async fn seed_demo_dataset(db: &Database) -> Result<(), RentoraError> {
    let cedar = Building {
        id: EntityId::generate(),
        name: "Cedar Court".to_string(),
        address: "14 Alder Street".to_string(),
        created_at: days_from_now(-400),
    };
    let willow = Building {
        id: EntityId::generate(),
        name: "Willow Park".to_string(),
        address: "3 Willow Lane".to_string(),
        created_at: days_from_now(-200),
    };
    insert_building(db, &cedar).await?;
    insert_building(db, &willow).await?;

    let room = |building_id, number: &str, rent_cents, status: &str| Room {
        id: EntityId::generate(),
        building_id,
        number: number.to_string(),
        monthly_rent_cents: rent_cents,
        status: status.to_string(),
        created_at: days_from_now(-390),
    };
    let r101 = room(cedar.id, "101", 95_000, "occupied");
    let r102 = room(cedar.id, "102", 120_000, "occupied");
    let r103 = room(cedar.id, "103", 90_000, "vacant");
    let r201 = room(cedar.id, "201", 110_000, "vacant");
    let r1a = room(willow.id, "1A", 150_000, "occupied");
    let r1b = room(willow.id, "1B", 140_000, "vacant");
    for r in [&r101, &r102, &r103, &r201, &r1a, &r1b] {
        insert_room(db, r).await?;
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
    let noor = contract(r101.id, "Noor Haddad", -180, 185, "active");
    let priya = contract(r102.id, "Priya Sharma", -340, 25, "active");
    let jonas = contract(r1a.id, "Jonas Weber", -30, 335, "active");
    let lena = contract(r103.id, "Lena Fischer", -700, -30, "ended");
    for c in [&noor, &priya, &jonas, &lena] {
        insert_contract(db, c).await?;
    }

    let payment = |contract_id, amount_cents, paid_days| Payment {
        id: EntityId::generate(),
        contract_id,
        amount_cents,
        paid_at: days_from_now(paid_days),
    };
    for p in [
        payment(noor.id, 95_000, -35),
        payment(noor.id, 95_000, -5),
        payment(priya.id, 120_000, -32),
        payment(jonas.id, 150_000, -2),
        payment(lena.id, 90_000, -45),
    ] {
        insert_payment(db, &p).await?;
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
        ticket(r101.id, "dripping kitchen tap", "pending", -3),
        ticket(r1a.id, "hallway light flickering", "in_progress", -10),
        ticket(r103.id, "repaint after move-out", "resolved", -25),
    ] {
        insert_maintenance_ticket(db, &t).await?;
    }

    let cancellation = CancellationRequest {
        id: EntityId::generate(),
        contract_id: priya.id,
        reason: "relocating for work".to_string(),
        requested_at: days_from_now(-2),
    };
    insert_cancellation_request(db, &cancellation).await?;

    let appointment = |room_id, visitor: &str, scheduled_days, status: &str| AppointmentRecord {
        id: EntityId::generate(),
        room_id,
        visitor_name: visitor.to_string(),
        scheduled_at: days_from_now(scheduled_days),
        status: status.to_string(),
        created_at: days_from_now(-8),
    };
    for a in [
        appointment(r103.id, "Omar Aziz", 3, "pending"),
        appointment(r1b.id, "Mei Chen", 5, "pending"),
        appointment(r1b.id, "Ivan Petrov", -7, "completed"),
    ] {
        insert_appointment(db, &a).await?;
    }

    Ok(())
}

/// ISO 8601 UTC timestamp offset from now by whole days.
fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}
