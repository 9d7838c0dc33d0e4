use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::join_all;
use tracing::{debug, warn};

use skyfare_core::{
    AggregatedSearchResponse, Provider, ProviderBatchResult, ProviderError, SearchRequest,
};

/// Ceiling for a single provider call. Adapters are expected to bound
/// themselves well below this; the engine enforces it regardless so a hung
/// provider degrades to a recorded failure instead of stalling the search.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no providers registered")]
    NoProviders,
}

/// Fans one search out to every registered provider concurrently and
/// merges the settled results.
///
/// Provider order is fixed at registration and preserved in the response
/// regardless of completion order. Failures are isolated per provider: a
/// broken or slow source degrades only its own entry in the result list.
pub struct SearchEngine {
    providers: Vec<Arc<dyn Provider>>,
    provider_timeout: Duration,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Register a provider. Result entries keep registration order.
    pub fn register(mut self, provider: Arc<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// Dispatch the request to every provider, wait for all of them to
    /// settle, and assemble the aggregated response.
    pub async fn search(
        &self,
        query: SearchRequest,
    ) -> Result<AggregatedSearchResponse, EngineError> {
        if self.providers.is_empty() {
            return Err(EngineError::NoProviders);
        }

        let started = Instant::now();
        debug!(
            providers = self.providers.len(),
            origin = %query.origin,
            destination = %query.destination,
            "dispatching search"
        );

        let timeout = self.provider_timeout;
        let query_ref = &query;
        let calls = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            async move {
                let timer = Instant::now();
                let outcome = tokio::time::timeout(timeout, provider.search(query_ref)).await;
                let elapsed_ms = timer.elapsed().as_millis() as u64;

                match outcome {
                    Ok(Ok(offers)) => {
                        debug!(
                            provider = provider.id(),
                            offers = offers.len(),
                            elapsed_ms,
                            "provider settled"
                        );
                        ProviderBatchResult::settled(provider.id(), elapsed_ms, offers)
                    }
                    Ok(Err(err)) => {
                        warn!(provider = provider.id(), elapsed_ms, error = %err, "provider failed");
                        ProviderBatchResult::failed(provider.id(), elapsed_ms, err.to_string())
                    }
                    Err(_) => {
                        warn!(provider = provider.id(), elapsed_ms, "provider exceeded engine timeout");
                        let err = ProviderError::Timeout(timeout.as_millis() as u64);
                        ProviderBatchResult::failed(provider.id(), elapsed_ms, err.to_string())
                    }
                }
            }
        });

        // join_all polls every branch concurrently and yields results in
        // input order; each branch folds its own failure into its entry,
        // so one broken provider cannot poison the rest.
        let results = join_all(calls).await;

        let total_offers = results.iter().map(|r| r.offers.len()).sum();
        Ok(AggregatedSearchResponse {
            ok: true,
            query,
            results,
            total_offers,
            took_ms: started.elapsed().as_millis() as u64,
        })
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skyfare_core::{PassengerMix, TripType};
    use skyfare_providers::mock::canned_offer;
    use skyfare_providers::{Blackstone, FlyOne, MockProvider};

    fn depart() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 10).unwrap()
    }

    fn one_way() -> SearchRequest {
        SearchRequest {
            origin: "BCN".into(),
            destination: "EVN".into(),
            depart: depart(),
            return_date: None,
            trip: TripType::OneWay,
            cabin: None,
            passengers: PassengerMix::adults(1),
            bags: 0,
        }
    }

    fn mock_with_offer(id: &str) -> MockProvider {
        MockProvider::new(id).with_offers(vec![canned_offer(id, "BCN", "EVN", depart())])
    }

    #[tokio::test]
    async fn test_two_providers_two_offers() {
        let engine = SearchEngine::new()
            .register(Arc::new(mock_with_offer("alpha")))
            .register(Arc::new(mock_with_offer("beta")));

        let response = engine.search(one_way()).await.unwrap();
        assert!(response.ok);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.total_offers, 2);
        assert_eq!(response.query, one_way());
    }

    #[tokio::test]
    async fn test_total_offers_sums_across_providers() {
        let two_offers = MockProvider::new("alpha").with_offers(vec![
            canned_offer("alpha", "BCN", "EVN", depart()),
            canned_offer("alpha", "BCN", "EVN", depart()),
        ]);
        let engine = SearchEngine::new()
            .register(Arc::new(two_offers))
            .register(Arc::new(mock_with_offer("beta")))
            .register(Arc::new(MockProvider::new("gamma")));

        let response = engine.search(one_way()).await.unwrap();
        let summed: usize = response.results.iter().map(|r| r.offers.len()).sum();
        assert_eq!(response.total_offers, summed);
        assert_eq!(response.total_offers, 3);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_provider() {
        let engine = SearchEngine::new()
            .register(Arc::new(MockProvider::new("broken").failing("boom")))
            .register(Arc::new(mock_with_offer("healthy")));

        let response = engine.search(one_way()).await.unwrap();
        assert!(response.ok);
        assert_eq!(response.results.len(), 2);

        let broken = &response.results[0];
        assert_eq!(broken.provider, "broken");
        assert!(broken.offers.is_empty());
        assert_eq!(broken.error.as_deref(), Some("boom"));

        let healthy = &response.results[1];
        assert_eq!(healthy.provider, "healthy");
        assert_eq!(healthy.offers.len(), 1);
        assert!(healthy.error.is_none());
    }

    #[tokio::test]
    async fn test_empty_results_are_not_an_error() {
        let engine = SearchEngine::new().register(Arc::new(MockProvider::new("quiet")));

        let response = engine.search(one_way()).await.unwrap();
        assert!(response.ok);
        assert!(response.results[0].offers.is_empty());
        assert!(response.results[0].error.is_none());
        assert_eq!(response.total_offers, 0);
    }

    #[tokio::test]
    async fn test_results_keep_registration_order() {
        // The slow provider is registered first and completes last
        let slow = MockProvider::new("slow")
            .with_offers(vec![canned_offer("slow", "BCN", "EVN", depart())])
            .with_delay(Duration::from_millis(150));
        let engine = SearchEngine::new()
            .register(Arc::new(slow))
            .register(Arc::new(mock_with_offer("fast")));

        let response = engine.search(one_way()).await.unwrap();
        assert_eq!(response.results[0].provider, "slow");
        assert_eq!(response.results[1].provider, "fast");
        assert_eq!(response.total_offers, 2);
    }

    #[tokio::test]
    async fn test_hung_provider_degrades_to_timeout_failure() {
        let hung = MockProvider::new("hung")
            .with_offers(vec![canned_offer("hung", "BCN", "EVN", depart())])
            .with_delay(Duration::from_millis(400));
        let engine = SearchEngine::new()
            .with_timeout(Duration::from_millis(100))
            .register(Arc::new(hung))
            .register(Arc::new(mock_with_offer("fast")));

        let response = engine.search(one_way()).await.unwrap();
        let timed_out = &response.results[0];
        assert!(timed_out.offers.is_empty());
        assert_eq!(
            timed_out.error.as_deref(),
            Some("provider timed out after 100ms")
        );
        assert_eq!(response.results[1].offers.len(), 1);
        assert_eq!(response.total_offers, 1);
    }

    #[tokio::test]
    async fn test_no_providers_is_an_engine_error() {
        let engine = SearchEngine::new();
        let err = engine.search(one_way()).await.unwrap_err();
        assert!(matches!(err, EngineError::NoProviders));
    }

    #[tokio::test]
    async fn test_identical_queries_reproduce_offer_ids() {
        let engine = SearchEngine::new()
            .register(Arc::new(FlyOne))
            .register(Arc::new(Blackstone));

        let first = engine.search(one_way()).await.unwrap();
        let second = engine.search(one_way()).await.unwrap();

        let ids = |resp: &AggregatedSearchResponse| -> Vec<String> {
            resp.results
                .iter()
                .flat_map(|r| r.offers.iter().map(|o| o.id.clone()))
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(
            ids(&first),
            vec!["flyone-BCN-EVN-2025-09-10", "blackstone-BCN-EVN-2025-09-10"]
        );
    }
}
