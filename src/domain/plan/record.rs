//! Raw plan documents as returned by the document store.

use serde::{Deserialize, Serialize};

/// Plan category used as the equality filter when fetching.
///
/// The store keeps both categories in a single `plans` collection and
/// distinguishes them by the `typeofplan` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Direct-to-Home satellite TV plans.
    Dth,
    /// Broadband internet plans.
    Internet,
}

impl PlanType {
    /// Returns the literal stored in the `typeofplan` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Dth => "dth",
            PlanType::Internet => "internet",
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw plan document from the `plans` collection.
///
/// Every field except the identifier is optional: records are authored by
/// hand in an admin console and frequently omit fields. Normalization into
/// a [`DisplayPlan`](super::DisplayPlan) applies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Store-issued document identifier.
    pub id: String,
    /// Display name of the plan.
    #[serde(default)]
    pub planname: Option<String>,
    /// Price as a numeric string (e.g. "399").
    #[serde(default)]
    pub amount: Option<String>,
    /// Billing period label (e.g. "month").
    #[serde(default)]
    pub duration: Option<String>,
    /// Promotional offer text; non-blank marks the plan as featured.
    #[serde(default)]
    pub offer: Option<String>,
    /// Main feature line (channel counts, packs, etc.).
    #[serde(default)]
    pub plandata: Option<String>,
    /// Installation terms: "free" or a price/description.
    #[serde(default)]
    pub installation: Option<String>,
    /// Connection speed, where applicable (internet plans mostly).
    #[serde(default)]
    pub speed: Option<String>,
    /// Plan category, matched against [`PlanType::as_str`].
    #[serde(default)]
    pub typeofplan: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_literals_match_store_values() {
        assert_eq!(PlanType::Dth.as_str(), "dth");
        assert_eq!(PlanType::Internet.as_str(), "internet");
    }

    #[test]
    fn plan_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PlanType::Dth).unwrap(), "\"dth\"");
    }

    #[test]
    fn record_deserializes_with_missing_fields() {
        let record: PlanRecord = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(record.id, "abc");
        assert!(record.planname.is_none());
        assert!(record.amount.is_none());
    }
}
