// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Rentora rental backend.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, typed insert helpers for seeding,
//! and [`SqliteReadServices`], the SQLite implementation of the five
//! dashboard reader traits.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod readers;

pub use database::Database;
pub use models::*;
pub use readers::SqliteReadServices;
