//! Plan store port (read side).
//!
//! Defines the contract for fetching plan documents from the hosted
//! collection. Callers await a single explicit readiness probe on an
//! injected handle and get back a `Ready | Unavailable` answer instead of
//! spinning on a global flag.

use async_trait::async_trait;

use crate::domain::plan::{PlanError, PlanRecord, PlanType};

/// Outcome of a readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// The handle is usable; fetching may proceed.
    Ready,
    /// The handle never became usable within the adapter's probe budget.
    /// Terminal for the load cycle; the fetch must not be attempted.
    Unavailable,
}

/// Reader port for the plan collection.
///
/// Implementations own their connection/readiness details; the flow only
/// sees the two-state answer and the fetched records.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Resolves once the store handle is usable, or reports that it never
    /// became so. Bounded internally; callers do not supply a timeout.
    async fn ready(&self) -> StoreStatus;

    /// Fetches all documents whose `typeofplan` equals the given category.
    ///
    /// Store order is passed through as returned (no ordering guarantee).
    /// Zero matches is `Ok` with an empty vec - a signal, not an error.
    async fn fetch_by_type(&self, plan_type: PlanType) -> Result<Vec<PlanRecord>, PlanError>;
}
