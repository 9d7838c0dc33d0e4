use serde::{Deserialize, Serialize};

use crate::itinerary::Itinerary;
use crate::money::Price;
use crate::search::{Cabin, SearchRequest};

/// Checked/carry-on baggage included with a fare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaggageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_checked_bags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_carry_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One priced result from one provider, in the normalized schema.
///
/// `id` is deterministic in (provider, origin, destination, depart date) so
/// repeated identical queries reproduce the same identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderOffer {
    pub id: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deeplink: Option<String>,
    pub outbound: Itinerary,
    /// Present iff the originating request was a round trip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<Itinerary>,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin: Option<Cabin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refundable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baggage: Option<BaggageInfo>,
    /// Provider-specific extension fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
    /// Raw upstream payload, kept for diagnostics only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

/// Outcome of querying exactly one provider.
///
/// An empty offer list is a normal "no results" outcome; `error` is set
/// only when the adapter itself failed technically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderBatchResult {
    pub provider: String,
    pub duration_ms: u64,
    pub offers: Vec<ProviderOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderBatchResult {
    pub fn settled(provider: &str, duration_ms: u64, offers: Vec<ProviderOffer>) -> Self {
        Self {
            provider: provider.to_string(),
            duration_ms,
            offers,
            error: None,
        }
    }

    pub fn failed(provider: &str, duration_ms: u64, error: String) -> Self {
        Self {
            provider: provider.to_string(),
            duration_ms,
            offers: Vec::new(),
            error: Some(error),
        }
    }
}

/// Root response: one batch result per registered provider, in
/// registration order, plus aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedSearchResponse {
    pub ok: bool,
    pub query: SearchRequest,
    pub results: Vec<ProviderBatchResult>,
    pub total_offers: usize,
    pub took_ms: u64,
}
