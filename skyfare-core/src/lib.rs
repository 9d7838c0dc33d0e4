pub mod itinerary;
pub mod money;
pub mod offer;
pub mod provider;
pub mod search;
pub mod validate;

pub use itinerary::{Itinerary, Segment};
pub use money::{Money, Price};
pub use offer::{AggregatedSearchResponse, BaggageInfo, ProviderBatchResult, ProviderOffer};
pub use provider::{HealthStatus, Provider, ProviderError};
pub use search::{Cabin, PassengerMix, SearchRequest, TripType};
pub use validate::{RawSearchQuery, ValidationError};
