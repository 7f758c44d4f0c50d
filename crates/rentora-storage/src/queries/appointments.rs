// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pending viewing appointments.

use rentora_core::types::{Appointment, ScopeFilter};
use rentora_core::{EntityId, RentoraError};
use rusqlite::params;

use crate::database::Database;

/// Appointments still awaiting confirmation, soonest first.
pub async fn pending_appointments(
    db: &Database,
    scope: Option<&ScopeFilter>,
) -> Result<Vec<Appointment>, RentoraError> {
    let building = scope.map(|s| s.building_id().to_string());
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT a.id, a.room_id, a.visitor_name, a.scheduled_at, a.status
                 FROM appointments a
                 JOIN rooms r ON r.id = a.room_id
                 WHERE a.status = 'pending' AND (?1 IS NULL OR r.building_id = ?1)
                 ORDER BY a.scheduled_at ASC",
            )?;
            let rows = stmt.query_map(params![building], |row| {
                let id: String = row.get(0)?;
                let room_id: String = row.get(1)?;
                let status: String = row.get(4)?;
                Ok(Appointment {
                    id: entity_id_column(0, &id)?,
                    room_id: entity_id_column(1, &room_id)?,
                    visitor_name: row.get(2)?,
                    scheduled_at: row.get(3)?,
                    status: status.parse().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            4,
                            rusqlite::types::Type::Text,
                            Box::new(e),
                        )
                    })?,
                })
            })?;
            let mut appointments = Vec::new();
            for row in rows {
                appointments.push(row?);
            }
            Ok(appointments)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Parse a UUID text column into an [`EntityId`].
fn entity_id_column(idx: usize, text: &str) -> Result<EntityId, rusqlite::Error> {
    text.parse::<EntityId>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
