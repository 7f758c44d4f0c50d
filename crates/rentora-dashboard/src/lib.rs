// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard aggregation for the Rentora rental backend.
//!
//! [`DashboardAggregator`] gates access behind the administrative role,
//! validates the optional building scope, then fans out concurrently to five
//! read services and composes their answers into one [`DashboardSnapshot`].
//! Any collaborator failure fails the whole call; a partial snapshot is never
//! produced.

pub mod aggregator;
pub mod snapshot;

pub use aggregator::DashboardAggregator;
pub use snapshot::DashboardSnapshot;
