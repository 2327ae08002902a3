//! HTML card renderer for display plans.
//!
//! Produces self-contained markup fragments for a load outcome: one
//! `plan-card` div per plan, or a fixed inline message for the empty and
//! failure cases. All interpolated field text runs through `html_escape`,
//! so plan records can never inject markup.
//!
//! The rendered container carries the call-to-action acknowledgement as a
//! single `data-plan-ack` attribute. Pages bind one delegated click listener
//! on the container instead of re-binding every button after each render.

use std::fmt::Write as _;

use crate::application::LoadOutcome;
use crate::domain::plan::{DisplayPlan, PlanError};

/// Inline message when the collection holds no matching plans.
pub const NO_PLANS_MESSAGE: &str = "No DTH plans available at the moment.";

/// Inline message when the fetch failed.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load plans. Please try again later.";

/// Inline message when the store never became ready.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Failed to load plans. Please refresh the page.";

/// Acknowledgement shown when a visitor activates a plan's call-to-action.
pub const PLAN_ACK_MESSAGE: &str =
    "Thank you for your interest! Please contact us to proceed with this plan.";

/// Label on every plan's call-to-action button.
pub const CHOOSE_PLAN_LABEL: &str = "Choose Plan";

const CURRENCY_SYMBOL: &str = "₹";

/// Renders display plans into HTML card fragments.
///
/// Rendering is pure string building with no side effects; inserting the
/// result into a page is the caller's responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

impl CardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full container content for one load cycle.
    ///
    /// The container content is replaced wholesale each cycle, so rendering
    /// the same outcome twice yields identical markup.
    pub fn render_container(&self, result: &Result<LoadOutcome, PlanError>) -> String {
        match result {
            Ok(LoadOutcome::Loaded(plans)) => self.render_cards(plans),
            Ok(LoadOutcome::Empty) => inline_message("no-plans-message", NO_PLANS_MESSAGE),
            Err(PlanError::Unavailable { .. }) => {
                inline_message("error-message", STORE_UNAVAILABLE_MESSAGE)
            }
            Err(PlanError::Query { .. }) => inline_message("error-message", FETCH_FAILED_MESSAGE),
        }
    }

    /// Renders the card grid with the delegated acknowledgement attribute.
    fn render_cards(&self, plans: &[DisplayPlan]) -> String {
        let mut html = format!(
            r#"<div class="plan-cards" data-plan-ack="{}">"#,
            html_escape(PLAN_ACK_MESSAGE)
        );
        for plan in plans {
            html.push_str(&self.render_card(plan));
        }
        html.push_str("</div>");
        html
    }

    /// Renders one plan card.
    pub fn render_card(&self, plan: &DisplayPlan) -> String {
        let class = if plan.featured {
            "plan-card featured"
        } else {
            "plan-card"
        };

        let mut html = format!(r#"<div class="{class}">"#);

        if plan.featured && !plan.badge.is_empty() {
            let _ = write!(
                html,
                r#"<div class="plan-badge">{}</div>"#,
                html_escape(&plan.badge)
            );
        }

        let _ = write!(
            html,
            r#"<div class="plan-header"><h3>{name}</h3><div class="plan-price">{symbol}{price}<span>/{duration}</span></div></div>"#,
            name = html_escape(&plan.name),
            symbol = CURRENCY_SYMBOL,
            price = plan.price,
            duration = html_escape(&plan.duration),
        );

        html.push_str(r#"<ul class="plan-features">"#);
        for feature in &plan.features {
            let _ = write!(html, "<li>{}</li>", html_escape(feature));
        }
        html.push_str("</ul>");

        let _ = write!(
            html,
            r#"<button class="plan-button">{CHOOSE_PLAN_LABEL}</button>"#
        );
        html.push_str("</div>");
        html
    }
}

fn inline_message(class: &str, message: &str) -> String {
    format!(r#"<div class="{class}">{}</div>"#, html_escape(message))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
