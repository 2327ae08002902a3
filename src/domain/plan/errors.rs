//! Error types for the plan loading flow.

use thiserror::Error;

/// Errors that occur while loading plans from the document store.
///
/// Both variants are terminal for a load cycle: callers render a fixed
/// inline message instead of retrying or propagating further.
#[derive(Debug, Clone, Error)]
pub enum PlanError {
    /// The store handle never became usable within its probe budget.
    #[error("plan store unavailable: {reason}")]
    Unavailable { reason: String },

    /// Transport or query failure while fetching plans.
    #[error("plan query failed: {reason}")]
    Query { reason: String },
}

impl PlanError {
    /// Creates an unavailability error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        PlanError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a query failure error.
    pub fn query(reason: impl Into<String>) -> Self {
        PlanError::Query {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = PlanError::query("connection reset");
        assert_eq!(err.to_string(), "plan query failed: connection reset");

        let err = PlanError::unavailable("probe budget exhausted");
        assert_eq!(
            err.to_string(),
            "plan store unavailable: probe budget exhausted"
        );
    }
}
