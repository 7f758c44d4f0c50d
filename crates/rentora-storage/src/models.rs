// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row types for storage entities.
//!
//! The dashboard read types live in `rentora-core::types` so they can cross
//! the reader trait boundaries; this module re-exports them for convenience.
//! The structs defined here are the write-side rows used by the seed helpers
//! and tests. Status columns are plain strings validated by the schema's
//! CHECK constraints; timestamps are ISO 8601 UTC text.

pub use rentora_core::types::{
    ActivityEvent, ActivityKind, Appointment, AppointmentStatus, ContractStats, MaintenanceStats,
    RoomStats,
};

use rentora_core::EntityId;

/// A building containing rentable rooms.
#[derive(Debug, Clone)]
pub struct Building {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub created_at: String,
}

/// A rentable room. `status` is `vacant` or `occupied`.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: EntityId,
    pub building_id: EntityId,
    pub number: String,
    pub monthly_rent_cents: i64,
    pub status: String,
    pub created_at: String,
}

/// A rental contract. `status` is `active`, `ended`, or `cancelled`.
#[derive(Debug, Clone)]
pub struct Contract {
    pub id: EntityId,
    pub room_id: EntityId,
    pub tenant_name: String,
    pub starts_on: String,
    pub ends_on: String,
    pub status: String,
    pub created_at: String,
}

/// A maintenance ticket. `status` is `pending`, `in_progress`, or `resolved`.
#[derive(Debug, Clone)]
pub struct MaintenanceTicket {
    pub id: EntityId,
    pub room_id: EntityId,
    pub title: String,
    pub status: String,
    pub opened_at: String,
    pub updated_at: String,
}

/// A recorded rent payment, in cents.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: EntityId,
    pub contract_id: EntityId,
    pub amount_cents: i64,
    pub paid_at: String,
}

/// A tenant's request to cancel a contract.
#[derive(Debug, Clone)]
pub struct CancellationRequest {
    pub id: EntityId,
    pub contract_id: EntityId,
    pub reason: String,
    pub requested_at: String,
}

/// A room-viewing appointment row. The dashboard-facing shape is
/// [`Appointment`]; this row additionally carries `created_at`.
#[derive(Debug, Clone)]
pub struct AppointmentRecord {
    pub id: EntityId,
    pub room_id: EntityId,
    pub visitor_name: String,
    pub scheduled_at: String,
    pub status: String,
    pub created_at: String,
}
