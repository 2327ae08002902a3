//! HTTP handlers for plan endpoints.
//!
//! These handlers connect Axum routes to the plan loading flow. Failures
//! stay inline per the error design: the plan endpoints always answer 200
//! with outcome-specific content, and `/health` carries the operational
//! signal instead.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use http::{header, StatusCode};

use crate::adapters::render::{
    CardRenderer, FETCH_FAILED_MESSAGE, NO_PLANS_MESSAGE, STORE_UNAVAILABLE_MESSAGE,
};
use crate::application::{LoadOutcome, LoadPlansHandler, LoadPlansQuery};
use crate::domain::plan::{PlanError, PlanType};
use crate::ports::{PlanStore, StoreStatus};

use super::dto::{HealthResponse, PlansListResponse};

/// Shared application state for the plan endpoints.
///
/// Cloned per request; the store handle is Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct PlansAppState {
    pub plan_store: Arc<dyn PlanStore>,
    pub renderer: CardRenderer,
}

impl PlansAppState {
    pub fn new(plan_store: Arc<dyn PlanStore>) -> Self {
        Self {
            plan_store,
            renderer: CardRenderer::new(),
        }
    }

    /// Creates the load handler on demand from the shared state.
    pub fn load_plans_handler(&self) -> LoadPlansHandler {
        LoadPlansHandler::new(self.plan_store.clone())
    }

    async fn load_dth_plans(&self) -> Result<LoadOutcome, PlanError> {
        self.load_plans_handler()
            .handle(LoadPlansQuery {
                plan_type: PlanType::Dth,
            })
            .await
    }
}

/// `GET /api/plans` - DTH plans as JSON.
pub async fn get_plans(State(state): State<PlansAppState>) -> impl IntoResponse {
    let envelope = match state.load_dth_plans().await {
        Ok(LoadOutcome::Loaded(plans)) => PlansListResponse::loaded(plans),
        Ok(LoadOutcome::Empty) => PlansListResponse::with_message(NO_PLANS_MESSAGE),
        Err(PlanError::Unavailable { .. }) => {
            PlansListResponse::with_message(STORE_UNAVAILABLE_MESSAGE)
        }
        Err(PlanError::Query { .. }) => PlansListResponse::with_message(FETCH_FAILED_MESSAGE),
    };
    Json(envelope)
}

/// `GET /api/plans/cards` - Server-rendered HTML card fragment.
pub async fn get_plan_cards(State(state): State<PlansAppState>) -> impl IntoResponse {
    let result = state.load_dth_plans().await;
    let html = state.renderer.render_container(&result);
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}

/// `GET /health` - Liveness probe.
///
/// Reports 503 when the store readiness probe fails, so orchestration can
/// see the dependency outage that the plan endpoints deliberately hide.
pub async fn health(State(state): State<PlansAppState>) -> impl IntoResponse {
    let store_ready = state.plan_store.ready().await == StoreStatus::Ready;
    let status = if store_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(HealthResponse {
            status: if store_ready { "ok" } else { "degraded" },
            store_ready,
        }),
    )
}
