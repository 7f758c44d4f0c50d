// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The composite dashboard view.

use serde::{Deserialize, Serialize};

use rentora_core::types::{
    ActivityEvent, Appointment, ContractStats, MaintenanceStats, RoomStats,
};

/// Point-in-time view assembled from the five read services.
///
/// Built fresh for each request and never persisted. The sub-queries run
/// without a shared transaction, so the sections may be staggered by the
/// request duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Room occupancy and revenue figures.
    pub rooms: RoomStats,
    /// Maintenance ticket counts by state.
    pub maintenance: MaintenanceStats,
    /// Contract counts by proximity to expiry.
    pub contracts: ContractStats,
    /// Merged recent events, newest first.
    pub recent_activity: Vec<ActivityEvent>,
    /// Viewing appointments awaiting confirmation.
    pub pending_appointments: Vec<Appointment>,
    /// When this snapshot was assembled, ISO 8601 UTC.
    pub generated_at: String,
}
