// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-service traits consumed by the dashboard aggregator.
//!
//! Each trait exposes one read-only query, optionally narrowed by a
//! [`ScopeFilter`]. Implementations live in `rentora-storage` (SQLite) and
//! `rentora-test-utils` (mocks); the aggregator holds them as trait objects
//! and never learns where the data comes from.
//!
//! All methods use `#[async_trait]` for dynamic dispatch and fail with
//! [`RentoraError::DataAccess`] when the underlying store errors.

use async_trait::async_trait;

use crate::error::RentoraError;
use crate::types::{
    ActivityEvent, Appointment, ContractStats, MaintenanceStats, RoomStats, ScopeFilter,
};

/// Room occupancy and revenue statistics.
#[async_trait]
pub trait RoomStatsReader: Send + Sync + 'static {
    /// Count rooms, vacancies, and collected revenue, optionally for one
    /// building.
    async fn room_stats(&self, scope: Option<&ScopeFilter>) -> Result<RoomStats, RentoraError>;
}

/// Maintenance ticket counts by state.
#[async_trait]
pub trait MaintenanceStatsReader: Send + Sync + 'static {
    /// Count tickets total, pending, and in progress, optionally for one
    /// building.
    async fn maintenance_stats(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<MaintenanceStats, RentoraError>;
}

/// Contract counts by proximity to expiry.
#[async_trait]
pub trait ContractStatsReader: Send + Sync + 'static {
    /// Count contracts total, active, and expiring soon, optionally for one
    /// building.
    async fn contract_stats(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<ContractStats, RentoraError>;
}

/// Merged recent-activity feed across payments, cancellation requests, and
/// maintenance tickets.
#[async_trait]
pub trait ActivityFeedReader: Send + Sync + 'static {
    /// The most recent events, newest first, bounded by the implementation's
    /// configured limit.
    async fn recent_activity(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<Vec<ActivityEvent>, RentoraError>;
}

/// Viewing appointments that still await confirmation.
#[async_trait]
pub trait AppointmentReader: Send + Sync + 'static {
    /// Pending appointments ordered by scheduled time, optionally for one
    /// building.
    async fn pending_appointments(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<Vec<Appointment>, RentoraError>;
}
