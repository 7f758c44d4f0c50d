// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contract statistics.

use rentora_core::types::{ContractStats, ScopeFilter};
use rentora_core::RentoraError;
use rusqlite::params;

use crate::database::Database;

/// Count contracts total, active, and expiring soon.
///
/// "Expiring soon" means active with `ends_on` between now and now plus
/// `expiring_within_days`. Contracts that already ended are not expiring.
pub async fn contract_stats(
    db: &Database,
    scope: Option<&ScopeFilter>,
    expiring_within_days: u32,
) -> Result<ContractStats, RentoraError> {
    let building = scope.map(|s| s.building_id().to_string());
    let window = format!("+{expiring_within_days} days");
    db.connection()
        .call(move |conn| {
            let stats = conn.query_row(
                "SELECT COUNT(*),
                        COALESCE(SUM(CASE WHEN c.status = 'active' THEN 1 ELSE 0 END), 0),
                        COALESCE(SUM(CASE WHEN c.status = 'active'
                                           AND c.ends_on >= strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                                           AND c.ends_on <= strftime('%Y-%m-%dT%H:%M:%fZ', 'now', ?2)
                                      THEN 1 ELSE 0 END), 0)
                 FROM contracts c
                 JOIN rooms r ON r.id = c.room_id
                 WHERE (?1 IS NULL OR r.building_id = ?1)",
                params![building, window],
                |row| {
                    Ok(ContractStats {
                        total: row.get(0)?,
                        active: row.get(1)?,
                        expiring_soon: row.get(2)?,
                    })
                },
            )?;
            Ok(stats)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
