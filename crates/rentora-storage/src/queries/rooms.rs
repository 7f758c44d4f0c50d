// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Room occupancy and revenue statistics.

use rentora_core::types::{RoomStats, ScopeFilter};
use rentora_core::RentoraError;
use rusqlite::params;

use crate::database::Database;

/// Count rooms and vacancies and sum collected payments, optionally narrowed
/// to one building. A NULL scope parameter disables the filter.
pub async fn room_stats(
    db: &Database,
    scope: Option<&ScopeFilter>,
) -> Result<RoomStats, RentoraError> {
    let building = scope.map(|s| s.building_id().to_string());
    db.connection()
        .call(move |conn| {
            let (total, vacant) = conn.query_row(
                "SELECT COUNT(*),
                        COALESCE(SUM(CASE WHEN status = 'vacant' THEN 1 ELSE 0 END), 0)
                 FROM rooms
                 WHERE (?1 IS NULL OR building_id = ?1)",
                params![building],
                |row| Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?)),
            )?;
            let revenue_cents: i64 = conn.query_row(
                "SELECT COALESCE(SUM(p.amount_cents), 0)
                 FROM payments p
                 JOIN contracts c ON c.id = p.contract_id
                 JOIN rooms r ON r.id = c.room_id
                 WHERE (?1 IS NULL OR r.building_id = ?1)",
                params![building],
                |row| row.get(0),
            )?;
            Ok(RoomStats {
                total,
                vacant,
                revenue_cents,
            })
        })
        .await
        .map_err(crate::database::map_tr_err)
}
