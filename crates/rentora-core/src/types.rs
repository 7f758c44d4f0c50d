// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Rentora crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::id::EntityId;

/// Access role attached to an authenticated caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access, including the operations dashboard.
    Admin,
    /// Building staff; may manage day-to-day records but not the dashboard.
    Staff,
    /// A tenant; may only access their own records.
    Tenant,
}

/// The authenticated caller: an identity plus its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable identity of the caller (configured token subject).
    pub subject: String,
    /// The caller's access role.
    pub role: Role,
}

impl Principal {
    /// Whether this caller holds the administrative role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Optional narrowing key applied uniformly across dashboard sub-queries:
/// restricts every statistic to one building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeFilter(pub EntityId);

impl ScopeFilter {
    /// The building this scope narrows to.
    pub fn building_id(&self) -> EntityId {
        self.0
    }
}

impl fmt::Display for ScopeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ScopeFilter {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<EntityId> for ScopeFilter {
    fn from(id: EntityId) -> Self {
        Self(id)
    }
}

/// Room occupancy and revenue figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    /// Total number of rooms in scope.
    pub total: u32,
    /// Rooms currently vacant.
    pub vacant: u32,
    /// Collected payment total in cents across rooms in scope.
    pub revenue_cents: i64,
}

/// Maintenance ticket counts by state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceStats {
    /// All tickets in scope.
    pub total: u32,
    /// Tickets awaiting triage.
    pub pending: u32,
    /// Tickets currently being worked.
    pub in_progress: u32,
}

/// Contract counts by proximity to expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStats {
    /// All contracts in scope.
    pub total: u32,
    /// Contracts currently active.
    pub active: u32,
    /// Active contracts ending within the configured window.
    pub expiring_soon: u32,
}

/// Source of a recent-activity entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A payment was recorded.
    Payment,
    /// A tenant filed a cancellation request.
    Cancellation,
    /// A maintenance ticket was opened.
    Maintenance,
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// What happened.
    pub kind: ActivityKind,
    /// ISO 8601 UTC timestamp of the event.
    pub occurred_at: String,
    /// Short human-readable description.
    pub description: String,
}

/// Scheduling state of a viewing appointment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A room-viewing appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: EntityId,
    pub room_id: EntityId,
    /// Name of the prospective tenant.
    pub visitor_name: String,
    /// ISO 8601 UTC time of the viewing.
    pub scheduled_at: String,
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_and_parse_round_trip() {
        for role in [Role::Admin, Role::Staff, Role::Tenant] {
            let text = role.to_string();
            let parsed = Role::from_str(&text).unwrap();
            assert_eq!(role, parsed);
        }
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::from_str("tenant").unwrap(), Role::Tenant);
    }

    #[test]
    fn only_admin_principal_is_admin() {
        let admin = Principal {
            subject: "ops".to_string(),
            role: Role::Admin,
        };
        let staff = Principal {
            subject: "front-desk".to_string(),
            role: Role::Staff,
        };
        assert!(admin.is_admin());
        assert!(!staff.is_admin());
    }

    #[test]
    fn scope_filter_parses_uuid_text() {
        let id = EntityId::generate();
        let scope: ScopeFilter = id.to_string().parse().unwrap();
        assert_eq!(scope.building_id(), id);
    }

    #[test]
    fn scope_filter_rejects_garbage() {
        assert!("not-a-valid-scope".parse::<ScopeFilter>().is_err());
    }

    #[test]
    fn room_stats_serialize_shape() {
        let stats = RoomStats {
            total: 10,
            vacant: 2,
            revenue_cents: 5_000_000,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total\":10"));
        assert!(json.contains("\"vacant\":2"));
        assert!(json.contains("\"revenue_cents\":5000000"));
    }

    #[test]
    fn activity_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityKind::Cancellation).unwrap();
        assert_eq!(json, "\"cancellation\"");
        assert_eq!(ActivityKind::Payment.to_string(), "payment");
    }

    #[test]
    fn appointment_round_trips_through_json() {
        let appt = Appointment {
            id: EntityId::generate(),
            room_id: EntityId::generate(),
            visitor_name: "Lan Pham".to_string(),
            scheduled_at: "2026-09-01T09:30:00.000Z".to_string(),
            status: AppointmentStatus::Pending,
        };
        let json = serde_json::to_string(&appt).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(appt, back);
        assert!(json.contains("\"status\":\"pending\""));
    }
}
