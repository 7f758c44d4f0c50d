// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementations of the dashboard reader traits.

use async_trait::async_trait;

use rentora_config::model::DashboardConfig;
use rentora_core::readers::{
    ActivityFeedReader, AppointmentReader, ContractStatsReader, MaintenanceStatsReader,
    RoomStatsReader,
};
use rentora_core::types::{
    ActivityEvent, Appointment, ContractStats, MaintenanceStats, RoomStats, ScopeFilter,
};
use rentora_core::RentoraError;

use crate::database::Database;
use crate::queries;

/// One SQLite-backed implementation of all five reader traits.
///
/// Holds the shared database handle plus the dashboard tuning knobs. Wrap one
/// instance in an `Arc` and hand clones of it to the aggregator for each
/// collaborator seat.
pub struct SqliteReadServices {
    db: Database,
    activity_limit: u32,
    expiring_within_days: u32,
}

impl SqliteReadServices {
    /// Build the read services over an open database, taking the feed limit
    /// and expiry window from configuration.
    pub fn new(db: Database, dashboard: &DashboardConfig) -> Self {
        Self {
            db,
            activity_limit: dashboard.activity_limit,
            expiring_within_days: dashboard.expiring_within_days,
        }
    }
}

#[async_trait]
impl RoomStatsReader for SqliteReadServices {
    async fn room_stats(&self, scope: Option<&ScopeFilter>) -> Result<RoomStats, RentoraError> {
        queries::rooms::room_stats(&self.db, scope).await
    }
}

#[async_trait]
impl MaintenanceStatsReader for SqliteReadServices {
    async fn maintenance_stats(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<MaintenanceStats, RentoraError> {
        queries::maintenance::maintenance_stats(&self.db, scope).await
    }
}

#[async_trait]
impl ContractStatsReader for SqliteReadServices {
    async fn contract_stats(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<ContractStats, RentoraError> {
        queries::contracts::contract_stats(&self.db, scope, self.expiring_within_days).await
    }
}

#[async_trait]
impl ActivityFeedReader for SqliteReadServices {
    async fn recent_activity(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<Vec<ActivityEvent>, RentoraError> {
        queries::activity::recent_activity(&self.db, scope, self.activity_limit).await
    }
}

#[async_trait]
impl AppointmentReader for SqliteReadServices {
    async fn pending_appointments(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<Vec<Appointment>, RentoraError> {
        queries::appointments::pending_appointments(&self.db, scope).await
    }
}
