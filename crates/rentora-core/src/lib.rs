// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Rentora rental management backend.
//!
//! This crate provides the error type, shared domain types, time-ordered
//! identifier generation, and the read-service trait seams used throughout
//! the Rentora workspace. Storage backends and mocks implement the traits
//! defined here.

pub mod error;
pub mod id;
pub mod readers;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RentoraError;
pub use id::EntityId;
pub use types::{Principal, Role, ScopeFilter};

// Re-export the read-service traits at crate root.
pub use readers::{
    ActivityFeedReader, AppointmentReader, ContractStatsReader, MaintenanceStatsReader,
    RoomStatsReader,
};
