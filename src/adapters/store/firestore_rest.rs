//! Firestore REST adapter - Implementation of PlanStore over the hosted
//! document database's HTTP API.
//!
//! Uses the `runQuery` endpoint with a single equality filter on the
//! `typeofplan` field. The collection is world-readable, so no credentials
//! are attached.
//!
//! # Configuration
//!
//! ```ignore
//! let config = FirestoreConfig::new("my-project")
//!     .with_collection("plans")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let store = FirestoreRestStore::new(config);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::domain::plan::{PlanError, PlanRecord, PlanType};
use crate::ports::{PlanStore, StoreStatus};

/// Configuration for the Firestore REST adapter.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Cloud project id.
    pub project_id: String,
    /// Database id within the project.
    pub database: String,
    /// Collection holding the plan documents.
    pub collection: String,
    /// Base URL for the API (default: https://firestore.googleapis.com/v1).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum readiness probes before reporting `Unavailable`.
    pub readiness_probes: u32,
    /// Pause between readiness probes.
    pub readiness_interval: Duration,
}

impl FirestoreConfig {
    /// Creates a configuration for the given project. The default readiness
    /// budget (50 probes at 100ms) caps the wait at roughly five seconds.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: "(default)".to_string(),
            collection: "plans".to_string(),
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            readiness_probes: 50,
            readiness_interval: Duration::from_millis(100),
        }
    }

    /// Sets the database id.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the collection to query.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the readiness probe budget.
    pub fn with_readiness_budget(mut self, probes: u32, interval: Duration) -> Self {
        self.readiness_probes = probes;
        self.readiness_interval = interval;
        self
    }
}

/// PlanStore implementation over the Firestore REST API.
pub struct FirestoreRestStore {
    config: FirestoreConfig,
    client: Client,
}

impl FirestoreRestStore {
    /// Creates a new store adapter with the given configuration.
    pub fn new(config: FirestoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the parent path for documents in the configured database.
    fn documents_parent(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.config.base_url, self.config.project_id, self.config.database
        )
    }

    /// Builds the runQuery endpoint URL.
    fn run_query_url(&self) -> String {
        format!("{}:runQuery", self.documents_parent())
    }

    /// One readiness probe: any HTTP answer means the store is reachable;
    /// only transport errors count as not-ready.
    async fn probe(&self) -> bool {
        self.client
            .get(format!(
                "{}/{}?pageSize=1",
                self.documents_parent(),
                self.config.collection
            ))
            .send()
            .await
            .is_ok()
    }
}

#[async_trait]
impl PlanStore for FirestoreRestStore {
    async fn ready(&self) -> StoreStatus {
        for attempt in 0..self.config.readiness_probes {
            if self.probe().await {
                if attempt > 0 {
                    tracing::debug!(attempt, "plan store became reachable");
                }
                return StoreStatus::Ready;
            }
            sleep(self.config.readiness_interval).await;
        }
        tracing::warn!(
            probes = self.config.readiness_probes,
            "plan store readiness budget exhausted"
        );
        StoreStatus::Unavailable
    }

    async fn fetch_by_type(&self, plan_type: PlanType) -> Result<Vec<PlanRecord>, PlanError> {
        let request = RunQueryRequest::equality_filter(
            &self.config.collection,
            "typeofplan",
            plan_type.as_str(),
        );

        let response = self
            .client
            .post(self.run_query_url())
            .json(&request)
            .send()
            .await
            .map_err(|err| PlanError::query(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanError::query(format!("store returned {status}")));
        }

        let items: Vec<RunQueryResponseItem> = response
            .json()
            .await
            .map_err(|err| PlanError::query(format!("malformed store response: {err}")))?;

        Ok(items
            .into_iter()
            .filter_map(|item| item.document)
            .map(PlanRecord::from)
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct RunQueryRequest {
    #[serde(rename = "structuredQuery")]
    structured_query: StructuredQuery,
}

impl RunQueryRequest {
    fn equality_filter(collection: &str, field: &str, value: &str) -> Self {
        Self {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: collection.to_string(),
                }],
                filter: QueryFilter {
                    field_filter: FieldFilter {
                        field: FieldReference {
                            field_path: field.to_string(),
                        },
                        op: "EQUAL".to_string(),
                        value: WireValue::string(value),
                    },
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where")]
    filter: QueryFilter,
}

#[derive(Debug, Serialize)]
struct CollectionSelector {
    #[serde(rename = "collectionId")]
    collection_id: String,
}

#[derive(Debug, Serialize)]
struct QueryFilter {
    #[serde(rename = "fieldFilter")]
    field_filter: FieldFilter,
}

#[derive(Debug, Serialize)]
struct FieldFilter {
    field: FieldReference,
    op: String,
    value: WireValue,
}

#[derive(Debug, Serialize)]
struct FieldReference {
    #[serde(rename = "fieldPath")]
    field_path: String,
}

/// Firestore's tagged value representation. Only the variants the plan
/// collection actually uses are modeled; amounts are sometimes authored as
/// numbers, so those are carried back as their string rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireValue {
    #[serde(rename = "stringValue", skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(rename = "integerValue", skip_serializing_if = "Option::is_none")]
    integer_value: Option<String>,
    #[serde(rename = "doubleValue", skip_serializing_if = "Option::is_none")]
    double_value: Option<f64>,
}

impl WireValue {
    fn string(value: &str) -> Self {
        Self {
            string_value: Some(value.to_string()),
            ..Self::default()
        }
    }

    /// Collapses the tagged value to display text.
    fn into_text(self) -> Option<String> {
        if let Some(s) = self.string_value {
            return Some(s);
        }
        if let Some(i) = self.integer_value {
            return Some(i);
        }
        self.double_value.map(|d| d.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RunQueryResponseItem {
    /// Absent on the trailing read-time-only item.
    #[serde(default)]
    document: Option<WireDocument>,
}

#[derive(Debug, Deserialize)]
struct WireDocument {
    /// Full resource name; the document id is its last path segment.
    name: String,
    #[serde(default)]
    fields: HashMap<String, WireValue>,
}

impl From<WireDocument> for PlanRecord {
    fn from(doc: WireDocument) -> Self {
        let id = doc
            .name
            .rsplit('/')
            .next()
            .unwrap_or(doc.name.as_str())
            .to_string();
        let mut fields = doc.fields;
        let mut take = |key: &str| fields.remove(key).and_then(WireValue::into_text);

        PlanRecord {
            id,
            planname: take("planname"),
            amount: take("amount"),
            duration: take("duration"),
            offer: take("offer"),
            plandata: take("plandata"),
            installation: take("installation"),
            speed: take("speed"),
            typeofplan: take("typeofplan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_request_serializes_to_firestore_shape() {
        let request = RunQueryRequest::equality_filter("plans", "typeofplan", "dth");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "structuredQuery": {
                    "from": [{"collectionId": "plans"}],
                    "where": {
                        "fieldFilter": {
                            "field": {"fieldPath": "typeofplan"},
                            "op": "EQUAL",
                            "value": {"stringValue": "dth"}
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn document_maps_to_record_with_id_from_resource_name() {
        let doc: WireDocument = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/plans/abc123",
            "fields": {
                "planname": {"stringValue": "Silver Pack"},
                "amount": {"integerValue": "399"},
                "typeofplan": {"stringValue": "dth"}
            }
        }))
        .unwrap();

        let record = PlanRecord::from(doc);
        assert_eq!(record.id, "abc123");
        assert_eq!(record.planname.as_deref(), Some("Silver Pack"));
        assert_eq!(record.amount.as_deref(), Some("399"));
        assert_eq!(record.typeofplan.as_deref(), Some("dth"));
        assert!(record.offer.is_none());
    }

    #[test]
    fn double_amounts_render_as_text() {
        let value = WireValue {
            double_value: Some(399.5),
            ..WireValue::default()
        };
        assert_eq!(value.into_text().as_deref(), Some("399.5"));
    }

    #[test]
    fn read_time_only_items_carry_no_document() {
        let item: RunQueryResponseItem =
            serde_json::from_value(json!({"readTime": "2026-01-01T00:00:00Z"})).unwrap();
        assert!(item.document.is_none());
    }

    #[test]
    fn urls_are_built_from_config() {
        let store = FirestoreRestStore::new(
            FirestoreConfig::new("demo-project").with_base_url("http://localhost:9099/v1"),
        );
        assert_eq!(
            store.run_query_url(),
            "http://localhost:9099/v1/projects/demo-project/databases/(default)/documents:runQuery"
        );
    }

    #[test]
    fn default_budget_matches_original_polling_ceiling() {
        let config = FirestoreConfig::new("demo");
        assert_eq!(config.readiness_probes, 50);
        assert_eq!(config.readiness_interval, Duration::from_millis(100));
    }
}
