// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock reader collaborators for deterministic aggregator testing.
//!
//! Each mock returns a pre-configured fixture (or a programmed failure),
//! counts its calls, and records every scope it was handed, so tests can
//! assert both what the aggregator returned and what it asked for.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use rentora_core::readers::{
    ActivityFeedReader, AppointmentReader, ContractStatsReader, MaintenanceStatsReader,
    RoomStatsReader,
};
use rentora_core::types::{
    ActivityEvent, Appointment, ContractStats, MaintenanceStats, RoomStats, ScopeFilter,
};
use rentora_core::RentoraError;

fn simulated_failure() -> RentoraError {
    RentoraError::data_access(std::io::Error::other("simulated read failure"))
}

/// Mock [`RoomStatsReader`] returning a pre-configured fixture.
pub struct MockRoomStatsReader {
    fixture: RoomStats,
    fail: bool,
    calls: AtomicUsize,
    scopes: Mutex<Vec<Option<ScopeFilter>>>,
}

impl MockRoomStatsReader {
    /// A mock that answers every call with `fixture`.
    pub fn returning(fixture: RoomStats) -> Self {
        Self {
            fixture,
            fail: false,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// A mock that fails every call with a data-access error.
    pub fn failing() -> Self {
        Self {
            fixture: RoomStats::default(),
            fail: true,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// How many times the reader was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every scope the reader was handed, in call order.
    pub async fn seen_scopes(&self) -> Vec<Option<ScopeFilter>> {
        self.scopes.lock().await.clone()
    }

    async fn record(&self, scope: Option<&ScopeFilter>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().await.push(scope.copied());
    }
}

impl Default for MockRoomStatsReader {
    fn default() -> Self {
        Self::returning(RoomStats::default())
    }
}

#[async_trait]
impl RoomStatsReader for MockRoomStatsReader {
    async fn room_stats(&self, scope: Option<&ScopeFilter>) -> Result<RoomStats, RentoraError> {
        self.record(scope).await;
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.fixture.clone())
    }
}

/// Mock [`MaintenanceStatsReader`] returning a pre-configured fixture.
pub struct MockMaintenanceStatsReader {
    fixture: MaintenanceStats,
    fail: bool,
    calls: AtomicUsize,
    scopes: Mutex<Vec<Option<ScopeFilter>>>,
}

impl MockMaintenanceStatsReader {
    /// A mock that answers every call with `fixture`.
    pub fn returning(fixture: MaintenanceStats) -> Self {
        Self {
            fixture,
            fail: false,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// A mock that fails every call with a data-access error.
    pub fn failing() -> Self {
        Self {
            fixture: MaintenanceStats::default(),
            fail: true,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// How many times the reader was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every scope the reader was handed, in call order.
    pub async fn seen_scopes(&self) -> Vec<Option<ScopeFilter>> {
        self.scopes.lock().await.clone()
    }

    async fn record(&self, scope: Option<&ScopeFilter>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().await.push(scope.copied());
    }
}

impl Default for MockMaintenanceStatsReader {
    fn default() -> Self {
        Self::returning(MaintenanceStats::default())
    }
}

#[async_trait]
impl MaintenanceStatsReader for MockMaintenanceStatsReader {
    async fn maintenance_stats(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<MaintenanceStats, RentoraError> {
        self.record(scope).await;
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.fixture.clone())
    }
}

/// Mock [`ContractStatsReader`] returning a pre-configured fixture.
pub struct MockContractStatsReader {
    fixture: ContractStats,
    fail: bool,
    calls: AtomicUsize,
    scopes: Mutex<Vec<Option<ScopeFilter>>>,
}

impl MockContractStatsReader {
    /// A mock that answers every call with `fixture`.
    pub fn returning(fixture: ContractStats) -> Self {
        Self {
            fixture,
            fail: false,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// A mock that fails every call with a data-access error.
    pub fn failing() -> Self {
        Self {
            fixture: ContractStats::default(),
            fail: true,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// How many times the reader was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every scope the reader was handed, in call order.
    pub async fn seen_scopes(&self) -> Vec<Option<ScopeFilter>> {
        self.scopes.lock().await.clone()
    }

    async fn record(&self, scope: Option<&ScopeFilter>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().await.push(scope.copied());
    }
}

impl Default for MockContractStatsReader {
    fn default() -> Self {
        Self::returning(ContractStats::default())
    }
}

#[async_trait]
impl ContractStatsReader for MockContractStatsReader {
    async fn contract_stats(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<ContractStats, RentoraError> {
        self.record(scope).await;
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.fixture.clone())
    }
}

/// Mock [`ActivityFeedReader`] returning a pre-configured feed.
pub struct MockActivityFeedReader {
    fixture: Vec<ActivityEvent>,
    fail: bool,
    calls: AtomicUsize,
    scopes: Mutex<Vec<Option<ScopeFilter>>>,
}

impl MockActivityFeedReader {
    /// A mock that answers every call with `fixture`.
    pub fn returning(fixture: Vec<ActivityEvent>) -> Self {
        Self {
            fixture,
            fail: false,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// A mock that fails every call with a data-access error.
    pub fn failing() -> Self {
        Self {
            fixture: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// How many times the reader was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every scope the reader was handed, in call order.
    pub async fn seen_scopes(&self) -> Vec<Option<ScopeFilter>> {
        self.scopes.lock().await.clone()
    }

    async fn record(&self, scope: Option<&ScopeFilter>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().await.push(scope.copied());
    }
}

impl Default for MockActivityFeedReader {
    fn default() -> Self {
        Self::returning(Vec::new())
    }
}

#[async_trait]
impl ActivityFeedReader for MockActivityFeedReader {
    async fn recent_activity(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<Vec<ActivityEvent>, RentoraError> {
        self.record(scope).await;
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.fixture.clone())
    }
}

/// Mock [`AppointmentReader`] returning a pre-configured list.
pub struct MockAppointmentReader {
    fixture: Vec<Appointment>,
    fail: bool,
    calls: AtomicUsize,
    scopes: Mutex<Vec<Option<ScopeFilter>>>,
}

impl MockAppointmentReader {
    /// A mock that answers every call with `fixture`.
    pub fn returning(fixture: Vec<Appointment>) -> Self {
        Self {
            fixture,
            fail: false,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// A mock that fails every call with a data-access error.
    pub fn failing() -> Self {
        Self {
            fixture: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
            scopes: Mutex::new(Vec::new()),
        }
    }

    /// How many times the reader was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every scope the reader was handed, in call order.
    pub async fn seen_scopes(&self) -> Vec<Option<ScopeFilter>> {
        self.scopes.lock().await.clone()
    }

    async fn record(&self, scope: Option<&ScopeFilter>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().await.push(scope.copied());
    }
}

impl Default for MockAppointmentReader {
    fn default() -> Self {
        Self::returning(Vec::new())
    }
}

#[async_trait]
impl AppointmentReader for MockAppointmentReader {
    async fn pending_appointments(
        &self,
        scope: Option<&ScopeFilter>,
    ) -> Result<Vec<Appointment>, RentoraError> {
        self.record(scope).await;
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.fixture.clone())
    }
}
