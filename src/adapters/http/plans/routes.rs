//! Axum router configuration for plan endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_plan_cards, get_plans, health, PlansAppState};

/// Create the plan API router.
///
/// # Routes
/// - `GET /plans` - DTH plans as JSON
/// - `GET /plans/cards` - Server-rendered HTML card fragment
pub fn plan_routes() -> Router<PlansAppState> {
    Router::new()
        .route("/plans", get(get_plans))
        .route("/plans/cards", get(get_plan_cards))
}

/// Create the complete service router.
///
/// Mounts the plan routes under `/api` and adds the liveness probe.
pub fn plans_router() -> Router<PlansAppState> {
    Router::new()
        .nest("/api", plan_routes())
        .route("/health", get(health))
}
