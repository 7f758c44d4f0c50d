// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Maintenance ticket statistics.

use rentora_core::types::{MaintenanceStats, ScopeFilter};
use rentora_core::RentoraError;
use rusqlite::params;

use crate::database::Database;

/// Count tickets total, pending, and in progress, optionally narrowed to one
/// building through the ticket's room.
pub async fn maintenance_stats(
    db: &Database,
    scope: Option<&ScopeFilter>,
) -> Result<MaintenanceStats, RentoraError> {
    let building = scope.map(|s| s.building_id().to_string());
    db.connection()
        .call(move |conn| {
            let stats = conn.query_row(
                "SELECT COUNT(*),
                        COALESCE(SUM(CASE WHEN t.status = 'pending' THEN 1 ELSE 0 END), 0),
                        COALESCE(SUM(CASE WHEN t.status = 'in_progress' THEN 1 ELSE 0 END), 0)
                 FROM maintenance_tickets t
                 JOIN rooms r ON r.id = t.room_id
                 WHERE (?1 IS NULL OR r.building_id = ?1)",
                params![building],
                |row| {
                    Ok(MaintenanceStats {
                        total: row.get(0)?,
                        pending: row.get(1)?,
                        in_progress: row.get(2)?,
                    })
                },
            )?;
            Ok(stats)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
