use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use skyfare_core::{
    Itinerary, Money, Price, Provider, ProviderError, ProviderOffer, SearchRequest, Segment,
};

/// Configurable provider double for engine and API tests.
///
/// Returns canned offers, optionally fails with a fixed message, and can
/// simulate upstream latency. Invocations are counted so tests can assert
/// that validation rejections never reach a provider.
pub struct MockProvider {
    id: String,
    offers: Vec<ProviderOffer>,
    fail_with: Option<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            offers: Vec::new(),
            fail_with: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_offers(mut self, offers: Vec<ProviderOffer>) -> Self {
        self.offers = offers;
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn search(&self, _req: &SearchRequest) -> Result<Vec<ProviderOffer>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.fail_with {
            return Err(ProviderError::Upstream(message.clone()));
        }

        Ok(self.offers.clone())
    }
}

/// Minimal one-segment offer for wiring mock providers in tests.
pub fn canned_offer(provider: &str, origin: &str, destination: &str, depart: NaiveDate) -> ProviderOffer {
    let departure = depart
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
        + chrono::Duration::hours(8);
    let arrival = departure + chrono::Duration::hours(4);

    ProviderOffer {
        id: format!("{provider}-{origin}-{destination}-{depart}"),
        provider: provider.to_string(),
        provider_code: None,
        deeplink: None,
        outbound: Itinerary::new(vec![Segment {
            marketing_carrier: "XX".to_string(),
            operating_carrier: None,
            flight_number: "XX 100".to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure,
            arrival,
            duration_minutes: Segment::minutes_between(departure, arrival),
            aircraft: None,
        }]),
        inbound: None,
        price: Price::of_total(Money::eur(10_000)),
        cabin: None,
        fare_class: None,
        refundable: None,
        baggage: None,
        extras: None,
        raw: None,
    }
}
