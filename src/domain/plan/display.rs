//! Derived display view of a plan and the normalization that produces it.

use serde::{Deserialize, Serialize};

use super::PlanRecord;

/// Trailing feature line appended to every plan.
pub const SUPPORT_FEATURE: &str = "24/7 Support";

/// Fallback plan name when the record has none.
const DEFAULT_NAME: &str = "Plan";

/// Fallback billing period when the record has none.
const DEFAULT_DURATION: &str = "month";

/// Display form of a plan, ready for rendering.
///
/// Built from a [`PlanRecord`] by [`DisplayPlan::from_record`]; nothing here
/// is persisted. The derived set is rebuilt on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPlan {
    /// Plan name, defaulted when the record omits one.
    pub name: String,
    /// Numeric price. Malformed or absent amounts coerce to 0.
    pub price: f64,
    /// Billing period label, defaulted to "month".
    pub duration: String,
    /// Promotional badge text; empty when the plan has no offer.
    pub badge: String,
    /// True iff the offer text is non-blank after trimming.
    pub featured: bool,
    /// Ordered feature lines; always ends with [`SUPPORT_FEATURE`].
    pub features: Vec<String>,
}

impl DisplayPlan {
    /// Normalizes one raw record into display form.
    pub fn from_record(record: &PlanRecord) -> Self {
        let offer = record.offer.as_deref().unwrap_or("");
        Self {
            name: text_or(record.planname.as_deref(), DEFAULT_NAME).to_string(),
            price: parse_amount(record.amount.as_deref()),
            duration: text_or(record.duration.as_deref(), DEFAULT_DURATION).to_string(),
            badge: offer.to_string(),
            featured: !offer.trim().is_empty(),
            features: build_features(record),
        }
    }
}

/// Normalizes a fetched batch and sorts it for display.
///
/// Output is ascending by price; the sort is stable, so records with equal
/// prices keep their fetch order. Malformed amounts parse to 0 and therefore
/// sort first.
pub fn to_display_plans(records: &[PlanRecord]) -> Vec<DisplayPlan> {
    let mut plans: Vec<DisplayPlan> = records.iter().map(DisplayPlan::from_record).collect();
    plans.sort_by(|a, b| a.price.total_cmp(&b.price));
    plans
}

/// Builds the ordered feature list for one record.
///
/// Fields that are absent or blank after trimming are skipped; kept values
/// are carried verbatim (untrimmed). The support line is always appended.
fn build_features(record: &PlanRecord) -> Vec<String> {
    let mut features = Vec::new();

    if let Some(plandata) = non_blank(record.plandata.as_deref()) {
        features.push(plandata.to_string());
    }

    if let Some(installation) = non_blank(record.installation.as_deref()) {
        if installation.eq_ignore_ascii_case("free") {
            features.push("Free Installation".to_string());
        } else {
            features.push(format!("{installation} Installation"));
        }
    }

    if let Some(speed) = non_blank(record.speed.as_deref()) {
        features.push(format!("{speed} Speed"));
    }

    features.push(SUPPORT_FEATURE.to_string());
    features
}

/// Returns the field value unless it is absent or blank after trimming.
fn non_blank(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.trim().is_empty())
}

/// Returns the field value unless it is absent or empty.
fn text_or<'a>(field: Option<&'a str>, default: &'a str) -> &'a str {
    match field {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Parses a price from the store's loosely-authored amount strings.
///
/// Takes the longest leading decimal prefix after skipping whitespace, so
/// "399", " 399.50", and "399rs" all yield a price; anything without a
/// leading number yields 0. The zero fallback means malformed records sort
/// to the front of the list.
fn parse_amount(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            seen_digit = true;
        }
        end = frac;
    }

    if !seen_digit {
        return 0.0;
    }
    trimmed[..end].parse().unwrap_or(0.0)
}
