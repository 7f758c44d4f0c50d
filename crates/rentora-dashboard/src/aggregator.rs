// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dashboard aggregator: authorization gate, scope validation, and
//! concurrent fan-out over the five read services.

use std::sync::Arc;

use tracing::debug;

use rentora_core::readers::{
    ActivityFeedReader, AppointmentReader, ContractStatsReader, MaintenanceStatsReader,
    RoomStatsReader,
};
use rentora_core::types::{Principal, ScopeFilter};
use rentora_core::RentoraError;

use crate::snapshot::DashboardSnapshot;

/// Assembles [`DashboardSnapshot`]s from five reader collaborators.
///
/// Order of checks is fixed: the administrative gate runs first and the scope
/// filter is validated second, both before any collaborator is called. A
/// caller that fails either check causes zero reads. The fan-out itself is
/// concurrent and fail-fast: the first collaborator error aborts the call and
/// no partial snapshot is ever produced.
pub struct DashboardAggregator {
    rooms: Arc<dyn RoomStatsReader>,
    maintenance: Arc<dyn MaintenanceStatsReader>,
    contracts: Arc<dyn ContractStatsReader>,
    activity: Arc<dyn ActivityFeedReader>,
    appointments: Arc<dyn AppointmentReader>,
}

impl DashboardAggregator {
    /// Wire the aggregator to its five collaborators.
    pub fn new(
        rooms: Arc<dyn RoomStatsReader>,
        maintenance: Arc<dyn MaintenanceStatsReader>,
        contracts: Arc<dyn ContractStatsReader>,
        activity: Arc<dyn ActivityFeedReader>,
        appointments: Arc<dyn AppointmentReader>,
    ) -> Self {
        Self {
            rooms,
            maintenance,
            contracts,
            activity,
            appointments,
        }
    }

    /// Build a snapshot for `principal`, optionally narrowed to one building.
    ///
    /// `scope` is the raw query-string value: when present it must parse as a
    /// building UUID or the call fails with [`RentoraError::Validation`].
    /// Non-administrative principals fail with [`RentoraError::Forbidden`].
    pub async fn snapshot(
        &self,
        principal: &Principal,
        scope: Option<&str>,
    ) -> Result<DashboardSnapshot, RentoraError> {
        if !principal.is_admin() {
            debug!(subject = %principal.subject, role = %principal.role, "dashboard denied");
            return Err(RentoraError::Forbidden(
                "administrative role required".to_string(),
            ));
        }

        let scope = parse_scope(scope)?;
        let scope = scope.as_ref();

        let (rooms, maintenance, contracts, recent_activity, pending_appointments) =
            tokio::try_join!(
                self.rooms.room_stats(scope),
                self.maintenance.maintenance_stats(scope),
                self.contracts.contract_stats(scope),
                self.activity.recent_activity(scope),
                self.appointments.pending_appointments(scope),
            )?;

        debug!(
            subject = %principal.subject,
            scoped = scope.is_some(),
            rooms = rooms.total,
            "dashboard snapshot assembled"
        );

        Ok(DashboardSnapshot {
            rooms,
            maintenance,
            contracts,
            recent_activity,
            pending_appointments,
            generated_at: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        })
    }
}

/// Parse the optional raw scope string into a building filter.
fn parse_scope(raw: Option<&str>) -> Result<Option<ScopeFilter>, RentoraError> {
    match raw {
        None => Ok(None),
        Some(text) => text.parse::<ScopeFilter>().map(Some).map_err(|_| {
            RentoraError::Validation(format!("invalid building filter: {text:?}"))
        }),
    }
}
