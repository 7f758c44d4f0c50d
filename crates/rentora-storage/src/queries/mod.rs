// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules backing the dashboard readers, plus seed-time inserts.

pub mod activity;
pub mod appointments;
pub mod contracts;
pub mod maintenance;
pub mod rooms;
pub mod seed;
