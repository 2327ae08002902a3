//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanStore` - Readiness probe and equality-filtered fetch against the
//!   hosted plan collection.

mod plan_store;

pub use plan_store::{PlanStore, StoreStatus};
