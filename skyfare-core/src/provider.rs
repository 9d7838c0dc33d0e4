use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::offer::ProviderOffer;
use crate::search::SearchRequest;

/// Technical failure inside a provider adapter.
///
/// "No results" is never an error; adapters return an empty vec for that.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider timed out after {0}ms")]
    Timeout(u64),
    #[error("{0}")]
    Upstream(String),
    #[error("failed to parse upstream response: {0}")]
    Parse(String),
}

/// Result of a provider's availability probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            ok: true,
            details: None,
        }
    }

    pub fn with_details(details: serde_json::Value) -> Self {
        Self {
            ok: true,
            details: Some(details),
        }
    }

    pub fn down(details: serde_json::Value) -> Self {
        Self {
            ok: false,
            details: Some(details),
        }
    }
}

/// Capability contract every airline connector implements.
///
/// Adapters translate the normalized [`SearchRequest`] into their
/// source-specific query, execute it, and normalize the response into
/// [`ProviderOffer`]s. The request is read-only; adapters must bound
/// their own latency (the engine enforces a ceiling on top).
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable name of the provider ("flyone", "blackstone", ...).
    fn id(&self) -> &str;

    /// Run the search and return zero or more normalized offers.
    async fn search(&self, req: &SearchRequest) -> Result<Vec<ProviderOffer>, ProviderError>;

    /// Availability probe for diagnostics; never called during a search.
    async fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{PassengerMix, TripType};
    use chrono::NaiveDate;

    struct NoResults;

    #[async_trait]
    impl Provider for NoResults {
        fn id(&self) -> &str {
            "noresults"
        }

        async fn search(
            &self,
            _req: &SearchRequest,
        ) -> Result<Vec<ProviderOffer>, ProviderError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_default_health_probe_is_up() {
        let provider = NoResults;
        let status = provider.health().await;
        assert!(status.ok);
        assert!(status.details.is_none());
    }

    #[tokio::test]
    async fn test_empty_search_is_a_successful_outcome() {
        let provider = NoResults;
        let req = SearchRequest {
            origin: "BCN".into(),
            destination: "EVN".into(),
            depart: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            return_date: None,
            trip: TripType::OneWay,
            cabin: None,
            passengers: PassengerMix::adults(1),
            bags: 0,
        };
        let offers = provider.search(&req).await.unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn test_provider_error_messages() {
        assert_eq!(
            ProviderError::Timeout(10_000).to_string(),
            "provider timed out after 10000ms"
        );
        assert_eq!(ProviderError::Upstream("boom".into()).to_string(), "boom");
    }
}
