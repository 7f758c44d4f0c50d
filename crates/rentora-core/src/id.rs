// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time-ordered entity identifier generation.
//!
//! Every persisted entity (building, room, contract, payment, ...) is keyed
//! by an [`EntityId`]: a UUID whose leading 48 bits are the creation time in
//! milliseconds (UUID version 7 layout). Identifiers created in different
//! milliseconds therefore sort by creation time when compared as raw
//! big-endian 128-bit values; identifiers within the same millisecond are
//! unordered but collision-resistant through 74 random bits.
//!
//! Generation is total: if the wall clock cannot be read (system time before
//! the Unix epoch), a fully random version-4 UUID is returned instead, which
//! keeps uniqueness and gives up time ordering. No call path panics or
//! returns an error.

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use rand::Rng as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, time-sortable identifier for a persisted entity.
///
/// Wire form is the standard 36-character hyphenated UUID text or the 16
/// raw bytes. Ordering on `EntityId` is the byte-wise UUID ordering, which
/// for version-7 identifiers is creation-time ordering at millisecond
/// granularity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh time-ordered identifier.
    ///
    /// Never fails: a clock read failure falls back to a random version-4
    /// UUID. Touches no shared mutable state, so it is safe to call from
    /// any number of threads without synchronization.
    pub fn generate() -> Self {
        Self(generate_at(SystemTime::now()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The 16 raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// The millisecond Unix timestamp embedded in the leading 48 bits.
    ///
    /// Meaningful only for time-ordered (version 7) identifiers; for a
    /// fallback version-4 identifier this is just random bits.
    pub fn unix_millis(&self) -> u64 {
        (self.0.as_u128() >> 80) as u64
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Generate an identifier for the given wall-clock reading.
///
/// The fallback is scoped to clock capture: bit assembly is infallible and
/// `thread_rng` aborts rather than erroring, so in practice the version-4
/// arm is reached only when `now` reads before the Unix epoch.
fn generate_at(now: SystemTime) -> Uuid {
    match unix_millis_of(now) {
        Some(millis) => {
            let mut random = [0u8; 10];
            rand::thread_rng().fill(&mut random[..]);
            v7_from_parts(millis, random)
        }
        None => Uuid::new_v4(),
    }
}

/// Milliseconds since the Unix epoch, masked to 48 bits.
///
/// `None` when the clock reads before the epoch. Values past 48 bits (year
/// 10889) wrap by masking rather than failing.
fn unix_millis_of(now: SystemTime) -> Option<u64> {
    let elapsed = now.duration_since(SystemTime::UNIX_EPOCH).ok()?;
    Some((elapsed.as_millis() & 0xFFFF_FFFF_FFFF) as u64)
}

/// Assemble a version-7 UUID from a 48-bit millisecond timestamp and 74
/// random bits.
///
/// Layout per RFC 9562: bytes 0-5 big-endian timestamp, version nibble 7 in
/// byte 6, RFC variant `10` in the top bits of byte 8, randomness elsewhere.
fn v7_from_parts(unix_ms: u64, random: [u8; 10]) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..6].copy_from_slice(&unix_ms.to_be_bytes()[2..8]);
    bytes[6..].copy_from_slice(&random);
    bytes[6] = (bytes[6] & 0x0F) | 0x70;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;
    Uuid::from_bytes(bytes)
}
