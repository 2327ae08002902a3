//! Application layer - query handlers.
//!
//! Orchestrates the plan loading flow over the ports: readiness probe,
//! fetch, then the pure domain transformation.

pub mod handlers;

pub use handlers::plan::{LoadOutcome, LoadPlansHandler, LoadPlansQuery};
