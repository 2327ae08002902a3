//! HTTP adapter for plan endpoints.
//!
//! Exposes the plan catalog via REST:
//! - `GET /api/plans` - DTH plans as JSON, sorted ascending by price
//! - `GET /api/plans/cards` - Server-rendered HTML card fragment
//! - `GET /health` - Liveness probe including store readiness

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{HealthResponse, PlanResponse, PlansListResponse};
pub use handlers::PlansAppState;
pub use routes::plans_router;
