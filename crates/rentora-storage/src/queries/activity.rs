// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merged recent-activity feed.
//!
//! Payments, cancellation requests, and newly opened maintenance tickets are
//! merged into one time-descending feed. Descriptions are assembled in SQL so
//! the three legs stay symmetric.

use rentora_core::types::{ActivityEvent, ActivityKind, ScopeFilter};
use rentora_core::RentoraError;
use rusqlite::params;

use crate::database::Database;

/// The most recent events across all three sources, newest first, at most
/// `limit` entries.
pub async fn recent_activity(
    db: &Database,
    scope: Option<&ScopeFilter>,
    limit: u32,
) -> Result<Vec<ActivityEvent>, RentoraError> {
    let building = scope.map(|s| s.building_id().to_string());
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT 'payment' AS kind, p.paid_at AS occurred_at,
                        'payment of ' || printf('%.2f', p.amount_cents / 100.0)
                            || ' received for room ' || r.number AS description
                 FROM payments p
                 JOIN contracts c ON c.id = p.contract_id
                 JOIN rooms r ON r.id = c.room_id
                 WHERE (?1 IS NULL OR r.building_id = ?1)
                 UNION ALL
                 SELECT 'cancellation', q.requested_at,
                        'cancellation requested by ' || c.tenant_name
                            || ' for room ' || r.number
                 FROM cancellation_requests q
                 JOIN contracts c ON c.id = q.contract_id
                 JOIN rooms r ON r.id = c.room_id
                 WHERE (?1 IS NULL OR r.building_id = ?1)
                 UNION ALL
                 SELECT 'maintenance', t.opened_at,
                        'maintenance reported for room ' || r.number || ': ' || t.title
                 FROM maintenance_tickets t
                 JOIN rooms r ON r.id = t.room_id
                 WHERE (?1 IS NULL OR r.building_id = ?1)
                 ORDER BY occurred_at DESC
                 LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![building, limit], |row| {
                let kind: String = row.get(0)?;
                let kind = kind.parse::<ActivityKind>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(ActivityEvent {
                    kind,
                    occurred_at: row.get(1)?,
                    description: row.get(2)?,
                })
            })?;
            let mut events = Vec::new();
            for row in rows {
                events.push(row?);
            }
            Ok(events)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
