//! WebStatus API client
//!
//! Single-shot lookups against the web-platform compatibility endpoint. One
//! plain GET per call: no retries, no backoff, no caching, no rate limiting.
//! The public fetch surface collapses every failure kind (transport error,
//! non-success status, empty result set) into `None` with a logged
//! diagnostic; callers render the unknown state.

use std::time::Duration;
use thiserror::Error;

use baseline_common::config::ServiceConfig;
use baseline_common::models::{FeatureRecord, FeaturesResponse};

/// WebStatus client errors
#[derive(Debug, Error)]
pub enum WebStatusError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse API response JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// WebStatus API client
#[derive(Debug, Clone)]
pub struct WebStatusClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl WebStatusClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, WebStatusError> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| WebStatusError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn features_request(&self, feature_id: &str) -> reqwest::RequestBuilder {
        self.http_client
            .get(format!("{}/v1/features", self.base_url))
            .query(&[("q", format!("id:{feature_id}"))])
    }

    /// Lookup a feature record by id.
    ///
    /// A successful response with an empty result set is `Ok(None)`; transport
    /// failures, non-success statuses and undecodable bodies are errors.
    pub async fn lookup_feature(
        &self,
        feature_id: &str,
    ) -> Result<Option<FeatureRecord>, WebStatusError> {
        tracing::debug!(feature_id = %feature_id, "Querying WebStatus API");

        let response = self
            .features_request(feature_id)
            .send()
            .await
            .map_err(|e| WebStatusError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WebStatusError::Api(status.as_u16(), error_text));
        }

        let envelope: FeaturesResponse = response
            .json()
            .await
            .map_err(|e| WebStatusError::Parse(e.to_string()))?;

        Ok(envelope.into_first())
    }

    /// Fetch a feature record, collapsing every failure to `None`.
    pub async fn fetch_feature(&self, feature_id: &str) -> Option<FeatureRecord> {
        match self.lookup_feature(feature_id).await {
            Ok(Some(record)) => {
                tracing::debug!(
                    feature_id = %feature_id,
                    name = %record.name,
                    "Retrieved feature record"
                );
                Some(record)
            }
            Ok(None) => {
                tracing::debug!(feature_id = %feature_id, "No matching feature record");
                None
            }
            Err(e) => {
                tracing::warn!(
                    feature_id = %feature_id,
                    error = %e,
                    "Failed to fetch baseline data"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> ServiceConfig {
        ServiceConfig {
            api_base_url: base_url.to_string(),
            ..ServiceConfig::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = WebStatusClient::new(&ServiceConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = WebStatusClient::new(&test_config("https://api.webstatus.dev/")).unwrap();
        assert_eq!(client.base_url, "https://api.webstatus.dev");
    }

    #[test]
    fn test_query_url_encoding() {
        let client = WebStatusClient::new(&test_config("https://api.webstatus.dev")).unwrap();
        let request = client.features_request("flexbox").build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://api.webstatus.dev/v1/features?q=id%3Aflexbox"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Port 1 on loopback: connection refused, no network needed
        let client = WebStatusClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        let result = client.lookup_feature("flexbox").await;
        assert!(matches!(result, Err(WebStatusError::Network(_))));
    }

    #[tokio::test]
    async fn test_fetch_feature_swallows_failure() {
        let client = WebStatusClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        assert!(client.fetch_feature("flexbox").await.is_none());
    }
}
