// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Rentora integration tests.
//!
//! Provides mock reader collaborators so aggregator and gateway tests run
//! deterministically without a database.

pub mod mock_readers;

pub use mock_readers::{
    MockActivityFeedReader, MockAppointmentReader, MockContractStatsReader,
    MockMaintenanceStatsReader, MockRoomStatsReader,
};
