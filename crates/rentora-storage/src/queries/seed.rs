// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write-side insert helpers, used by the seed subcommand and tests.
//!
//! One function per entity; callers supply fully-populated rows with
//! pre-generated identifiers and explicit timestamps.

use rentora_core::RentoraError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{
    AppointmentRecord, Building, CancellationRequest, Contract, MaintenanceTicket, Payment, Room,
};

/// Insert a building.
pub async fn insert_building(db: &Database, building: &Building) -> Result<(), RentoraError> {
    let building = building.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO buildings (id, name, address, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    building.id.to_string(),
                    building.name,
                    building.address,
                    building.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a room. The referenced building must exist.
pub async fn insert_room(db: &Database, room: &Room) -> Result<(), RentoraError> {
    let room = room.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO rooms (id, building_id, number, monthly_rent_cents, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    room.id.to_string(),
                    room.building_id.to_string(),
                    room.number,
                    room.monthly_rent_cents,
                    room.status,
                    room.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a contract. The referenced room must exist.
pub async fn insert_contract(db: &Database, contract: &Contract) -> Result<(), RentoraError> {
    let contract = contract.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO contracts (id, room_id, tenant_name, starts_on, ends_on, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    contract.id.to_string(),
                    contract.room_id.to_string(),
                    contract.tenant_name,
                    contract.starts_on,
                    contract.ends_on,
                    contract.status,
                    contract.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a maintenance ticket. The referenced room must exist.
pub async fn insert_maintenance_ticket(
    db: &Database,
    ticket: &MaintenanceTicket,
) -> Result<(), RentoraError> {
    let ticket = ticket.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO maintenance_tickets (id, room_id, title, status, opened_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    ticket.id.to_string(),
                    ticket.room_id.to_string(),
                    ticket.title,
                    ticket.status,
                    ticket.opened_at,
                    ticket.updated_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a payment. The referenced contract must exist.
pub async fn insert_payment(db: &Database, payment: &Payment) -> Result<(), RentoraError> {
    let payment = payment.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO payments (id, contract_id, amount_cents, paid_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    payment.id.to_string(),
                    payment.contract_id.to_string(),
                    payment.amount_cents,
                    payment.paid_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a cancellation request. The referenced contract must exist.
pub async fn insert_cancellation_request(
    db: &Database,
    request: &CancellationRequest,
) -> Result<(), RentoraError> {
    let request = request.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO cancellation_requests (id, contract_id, reason, requested_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    request.id.to_string(),
                    request.contract_id.to_string(),
                    request.reason,
                    request.requested_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Count buildings, used to detect an already-populated database before
/// seeding.
pub async fn building_count(db: &Database) -> Result<i64, RentoraError> {
    db.connection()
        .call(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM buildings", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert an appointment. The referenced room must exist.
pub async fn insert_appointment(
    db: &Database,
    appointment: &AppointmentRecord,
) -> Result<(), RentoraError> {
    let appointment = appointment.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO appointments (id, room_id, visitor_name, scheduled_at, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    appointment.id.to_string(),
                    appointment.room_id.to_string(),
                    appointment.visitor_name,
                    appointment.scheduled_at,
                    appointment.status,
                    appointment.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
