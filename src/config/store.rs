//! Document store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Cloud project id hosting the plan collection
    pub project_id: String,

    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Database id within the project
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection holding the plan documents
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Maximum readiness probes before reporting the store unavailable
    #[serde(default = "default_readiness_probes")]
    pub readiness_probes: u32,

    /// Pause between readiness probes in milliseconds
    #[serde(default = "default_readiness_interval_ms")]
    pub readiness_interval_ms: u64,
}

impl StoreConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get readiness probe interval as Duration
    pub fn readiness_interval(&self) -> Duration {
        Duration::from_millis(self.readiness_interval_ms)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.is_empty() {
            return Err(ValidationError::MissingRequired("STORE__PROJECT_ID"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidStoreUrl);
        }
        if self.collection.is_empty() {
            return Err(ValidationError::MissingRequired("STORE__COLLECTION"));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.readiness_probes == 0 || self.readiness_probes > 600 {
            return Err(ValidationError::InvalidProbeBudget);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            base_url: default_base_url(),
            database: default_database(),
            collection: default_collection(),
            request_timeout_secs: default_request_timeout(),
            readiness_probes: default_readiness_probes(),
            readiness_interval_ms: default_readiness_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "plans".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

// 50 x 100ms keeps the readiness ceiling at roughly five seconds.
fn default_readiness_probes() -> u32 {
    50
}

fn default_readiness_interval_ms() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StoreConfig {
        StoreConfig {
            project_id: "demo-project".to_string(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn defaults_preserve_original_probe_budget() {
        let config = StoreConfig::default();
        assert_eq!(config.readiness_probes, 50);
        assert_eq!(config.readiness_interval(), Duration::from_millis(100));
        assert_eq!(config.collection, "plans");
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn empty_project_is_rejected() {
        let config = StoreConfig {
            project_id: String::new(),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = StoreConfig {
            base_url: "ftp://example".to_string(),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStoreUrl)
        ));
    }

    #[test]
    fn zero_probe_budget_is_rejected() {
        let config = StoreConfig {
            readiness_probes: 0,
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidProbeBudget)
        ));
    }
}
