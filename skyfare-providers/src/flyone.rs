use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde_json::json;

use skyfare_core::{
    BaggageInfo, Cabin, HealthStatus, Itinerary, Money, Price, Provider, ProviderError,
    ProviderOffer, SearchRequest, Segment, TripType,
};

const PROVIDER_ID: &str = "flyone";
const CARRIER: &str = "5F";
const TOTAL_EUR_MINOR: i64 = 19_900; // 199.00 EUR

/// FlyOne connector.
///
/// Deterministic stub until the real API integration lands: one morning
/// rotation out, one afternoon rotation back, fixed EUR fare.
pub struct FlyOne;

fn at(date: NaiveDate, hour: i64, minute: i64) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(hour) + Duration::minutes(minute)
}

fn leg(
    origin: &str,
    destination: &str,
    flight_number: &str,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
) -> Segment {
    Segment {
        marketing_carrier: CARRIER.to_string(),
        operating_carrier: None,
        flight_number: flight_number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure,
        arrival,
        duration_minutes: Segment::minutes_between(departure, arrival),
        aircraft: None,
    }
}

#[async_trait]
impl Provider for FlyOne {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn search(&self, req: &SearchRequest) -> Result<Vec<ProviderOffer>, ProviderError> {
        // An incomplete request at this boundary means no results, not a fault
        if req.origin.is_empty() || req.destination.is_empty() {
            return Ok(Vec::new());
        }

        // Departs 09:00, arrives 13:30
        let outbound = Itinerary::new(vec![leg(
            &req.origin,
            &req.destination,
            "5F 701",
            at(req.depart, 9, 0),
            at(req.depart, 13, 30),
        )]);

        let inbound = match (req.trip, req.return_date) {
            (TripType::Round, Some(ret)) => Some(Itinerary::new(vec![leg(
                &req.destination,
                &req.origin,
                "5F 702",
                at(ret, 15, 30),
                at(ret, 20, 0),
            )])),
            _ => None,
        };

        let offer = ProviderOffer {
            id: format!(
                "{}-{}-{}-{}",
                PROVIDER_ID, req.origin, req.destination, req.depart
            ),
            provider: PROVIDER_ID.to_string(),
            provider_code: None,
            deeplink: Some("https://flyone.eu/".to_string()),
            outbound,
            inbound,
            price: Price::of_total(Money::eur(TOTAL_EUR_MINOR)),
            cabin: Some(req.cabin.unwrap_or(Cabin::Economy)),
            fare_class: None,
            refundable: None,
            baggage: Some(BaggageInfo {
                included_checked_bags: Some(req.bags.min(1)),
                included_carry_on: Some(true),
                notes: None,
            }),
            extras: None,
            raw: None,
        };

        Ok(vec![offer])
    }

    async fn health(&self) -> HealthStatus {
        HealthStatus::with_details(json!({ "mode": "stub", "carrier": CARRIER }))
    }
}
