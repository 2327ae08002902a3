//! In-memory plan store for tests and local development.
//!
//! Deterministic, synchronous-in-spirit implementation of `PlanStore`.
//! Not intended for production use: lock operations use `.expect()` and
//! will panic if poisoned, which is acceptable for test code only.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::plan::{PlanError, PlanRecord, PlanType};
use crate::ports::{PlanStore, StoreStatus};

/// In-memory plan store.
///
/// Features:
/// - Seeded record sets filtered by `typeofplan` on fetch
/// - Switchable availability and fetch failure for error-path tests
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned.
pub struct InMemoryPlanStore {
    records: RwLock<Vec<PlanRecord>>,
    available: RwLock<bool>,
    fail_fetch: RwLock<bool>,
}

impl InMemoryPlanStore {
    /// Creates an empty, available store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            available: RwLock::new(true),
            fail_fetch: RwLock::new(false),
        }
    }

    /// Creates an available store seeded with the given records.
    pub fn with_records(records: Vec<PlanRecord>) -> Self {
        let store = Self::new();
        *store.records.write().expect("InMemoryPlanStore: records lock poisoned") = records;
        store
    }

    /// Creates a store whose readiness probe always reports `Unavailable`.
    pub fn unavailable() -> Self {
        let store = Self::new();
        *store.available.write().expect("InMemoryPlanStore: available lock poisoned") = false;
        store
    }

    /// Creates an available store whose fetches always fail.
    pub fn failing() -> Self {
        let store = Self::new();
        *store.fail_fetch.write().expect("InMemoryPlanStore: fail_fetch lock poisoned") = true;
        store
    }

    /// Replaces the seeded records (for multi-cycle tests).
    pub fn set_records(&self, records: Vec<PlanRecord>) {
        *self
            .records
            .write()
            .expect("InMemoryPlanStore: records lock poisoned") = records;
    }
}

impl Default for InMemoryPlanStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn ready(&self) -> StoreStatus {
        if *self
            .available
            .read()
            .expect("InMemoryPlanStore: available lock poisoned")
        {
            StoreStatus::Ready
        } else {
            StoreStatus::Unavailable
        }
    }

    async fn fetch_by_type(&self, plan_type: PlanType) -> Result<Vec<PlanRecord>, PlanError> {
        if *self
            .fail_fetch
            .read()
            .expect("InMemoryPlanStore: fail_fetch lock poisoned")
        {
            return Err(PlanError::query("simulated transport failure"));
        }
        Ok(self
            .records
            .read()
            .expect("InMemoryPlanStore: records lock poisoned")
            .iter()
            .filter(|record| record.typeofplan.as_deref() == Some(plan_type.as_str()))
            .cloned()
            .collect())
    }
}
