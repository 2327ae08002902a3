//! HTTP adapters - Axum endpoints for the plan catalog.

pub mod plans;
