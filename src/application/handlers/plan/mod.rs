//! Plan query handlers.

mod load_plans;

pub use load_plans::{LoadOutcome, LoadPlansHandler, LoadPlansQuery};
