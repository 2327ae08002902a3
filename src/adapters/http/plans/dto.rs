//! HTTP DTOs for plan endpoints.
//!
//! These types define the JSON response structure for the plan API and are
//! the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::adapters::render::PLAN_ACK_MESSAGE;
use crate::domain::plan::DisplayPlan;

/// One plan in the JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub name: String,
    pub price: f64,
    pub duration: String,
    /// Offer text; empty when the plan is not featured.
    pub badge: String,
    pub featured: bool,
    pub features: Vec<String>,
}

impl From<DisplayPlan> for PlanResponse {
    fn from(plan: DisplayPlan) -> Self {
        Self {
            name: plan.name,
            price: plan.price,
            duration: plan.duration,
            badge: plan.badge,
            featured: plan.featured,
            features: plan.features,
        }
    }
}

/// Envelope for the plans listing.
///
/// Failures are reported inline through `message` with an empty `plans`
/// list, mirroring the inline-message error design: the endpoint answers
/// 200 either way and the rest of the page keeps working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlansListResponse {
    pub plans: Vec<PlanResponse>,
    /// Inline empty/failure message; absent on a successful non-empty load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Acknowledgement text for the delegated call-to-action handler.
    pub ack_message: String,
}

impl PlansListResponse {
    /// Envelope for a successful non-empty load.
    pub fn loaded(plans: Vec<DisplayPlan>) -> Self {
        Self {
            plans: plans.into_iter().map(PlanResponse::from).collect(),
            message: None,
            ack_message: PLAN_ACK_MESSAGE.to_string(),
        }
    }

    /// Envelope carrying only an inline message.
    pub fn with_message(message: &str) -> Self {
        Self {
            plans: Vec::new(),
            message: Some(message.to_string()),
            ack_message: PLAN_ACK_MESSAGE.to_string(),
        }
    }
}

/// Response for the liveness probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store_ready: bool,
}
