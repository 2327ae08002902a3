//! LoadPlansHandler - Query handler for the plan loading flow.
//!
//! Drives the full cycle: readiness probe, equality-filtered fetch, then the
//! pure transformation into sorted display plans. Failures stay local to the
//! flow - callers map them to inline messages rather than propagating.

use std::sync::Arc;

use crate::domain::plan::{to_display_plans, DisplayPlan, PlanError, PlanType};
use crate::ports::{PlanStore, StoreStatus};

/// Query to load all plans of one category.
#[derive(Debug, Clone, Copy)]
pub struct LoadPlansQuery {
    pub plan_type: PlanType,
}

/// Successful outcome of a load cycle.
///
/// An empty fetch result is a distinct signal, not an error: the caller
/// shows the "no plans" message instead of a failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Plans were fetched and normalized, sorted ascending by price.
    Loaded(Vec<DisplayPlan>),
    /// The store answered with zero matching records.
    Empty,
}

/// Handler for loading and normalizing plans.
pub struct LoadPlansHandler {
    store: Arc<dyn PlanStore>,
}

impl LoadPlansHandler {
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self { store }
    }

    /// Runs one load cycle.
    ///
    /// Re-running sequentially is idempotent for the same store contents:
    /// the derived set is rebuilt from scratch each time.
    pub async fn handle(&self, query: LoadPlansQuery) -> Result<LoadOutcome, PlanError> {
        if self.store.ready().await == StoreStatus::Unavailable {
            tracing::error!(plan_type = %query.plan_type, "plan store never became ready");
            return Err(PlanError::unavailable("store handle not initialized"));
        }

        let records = self
            .store
            .fetch_by_type(query.plan_type)
            .await
            .map_err(|err| {
                tracing::error!(plan_type = %query.plan_type, error = %err, "plan fetch failed");
                err
            })?;

        if records.is_empty() {
            tracing::debug!(plan_type = %query.plan_type, "no plans in collection");
            return Ok(LoadOutcome::Empty);
        }

        let plans = to_display_plans(&records);
        tracing::debug!(plan_type = %query.plan_type, count = plans.len(), "plans loaded");
        Ok(LoadOutcome::Loaded(plans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::PlanRecord;
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockPlanStore {
        records: Vec<PlanRecord>,
        available: bool,
        fail_fetch: bool,
    }

    impl MockPlanStore {
        fn with_records(records: Vec<PlanRecord>) -> Self {
            Self {
                records,
                available: true,
                fail_fetch: false,
            }
        }

        fn unavailable() -> Self {
            Self {
                records: Vec::new(),
                available: false,
                fail_fetch: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Vec::new(),
                available: true,
                fail_fetch: true,
            }
        }
    }

    #[async_trait]
    impl PlanStore for MockPlanStore {
        async fn ready(&self) -> StoreStatus {
            if self.available {
                StoreStatus::Ready
            } else {
                StoreStatus::Unavailable
            }
        }

        async fn fetch_by_type(
            &self,
            plan_type: PlanType,
        ) -> Result<Vec<PlanRecord>, PlanError> {
            if self.fail_fetch {
                return Err(PlanError::query("simulated transport failure"));
            }
            Ok(self
                .records
                .iter()
                .filter(|r| r.typeofplan.as_deref() == Some(plan_type.as_str()))
                .cloned()
                .collect())
        }
    }

    fn dth_record(id: &str, amount: Option<&str>, offer: Option<&str>) -> PlanRecord {
        PlanRecord {
            id: id.to_string(),
            amount: amount.map(str::to_string),
            offer: offer.map(str::to_string),
            typeofplan: Some("dth".to_string()),
            ..PlanRecord::default()
        }
    }

    fn query() -> LoadPlansQuery {
        LoadPlansQuery {
            plan_type: PlanType::Dth,
        }
    }

    #[tokio::test]
    async fn loads_and_sorts_plans() {
        let store = Arc::new(MockPlanStore::with_records(vec![
            dth_record("a", Some("599"), Some("10% off")),
            dth_record("b", Some("399"), None),
        ]));
        let handler = LoadPlansHandler::new(store);

        let outcome = handler.handle(query()).await.unwrap();
        let LoadOutcome::Loaded(plans) = outcome else {
            panic!("expected loaded outcome");
        };
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].price, 399.0);
        assert_eq!(plans[1].price, 599.0);
        assert!(!plans[0].featured);
        assert!(plans[1].featured);
    }

    #[tokio::test]
    async fn empty_collection_is_a_signal_not_an_error() {
        let store = Arc::new(MockPlanStore::with_records(Vec::new()));
        let handler = LoadPlansHandler::new(store);

        let outcome = handler.handle(query()).await.unwrap();
        assert_eq!(outcome, LoadOutcome::Empty);
    }

    #[tokio::test]
    async fn records_of_other_categories_are_filtered_out() {
        let mut internet = dth_record("net", Some("499"), None);
        internet.typeofplan = Some("internet".to_string());
        let store = Arc::new(MockPlanStore::with_records(vec![internet]));
        let handler = LoadPlansHandler::new(store);

        let outcome = handler.handle(query()).await.unwrap();
        assert_eq!(outcome, LoadOutcome::Empty);
    }

    #[tokio::test]
    async fn unavailable_store_fails_without_fetching() {
        let store = Arc::new(MockPlanStore::unavailable());
        let handler = LoadPlansHandler::new(store);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, PlanError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn fetch_failure_propagates_as_query_error() {
        let store = Arc::new(MockPlanStore::failing());
        let handler = LoadPlansHandler::new(store);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, PlanError::Query { .. }));
    }

    #[tokio::test]
    async fn sequential_reruns_yield_identical_outcomes() {
        let store = Arc::new(MockPlanStore::with_records(vec![
            dth_record("a", Some("599"), Some("10% off")),
            dth_record("b", Some("399"), None),
        ]));
        let handler = LoadPlansHandler::new(store);

        let first = handler.handle(query()).await.unwrap();
        let second = handler.handle(query()).await.unwrap();
        assert_eq!(first, second);
    }
}
