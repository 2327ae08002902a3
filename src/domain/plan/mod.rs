//! Plan domain: raw store documents, the derived display view, and the
//! pure normalization between them.

mod display;
mod errors;
mod record;

pub use display::{to_display_plans, DisplayPlan, SUPPORT_FEATURE};
pub use errors::PlanError;
pub use record::{PlanRecord, PlanType};
