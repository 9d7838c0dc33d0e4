use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use skyfare_core::{
    BaggageInfo, Cabin, Itinerary, Money, Price, Provider, ProviderError, ProviderOffer,
    SearchRequest, Segment, TripType,
};

const PROVIDER_ID: &str = "blackstone";
const CARRIER: &str = "BS";
const TOTAL_EUR_MINOR: i64 = 18_900; // 189.00 EUR

/// Blackstone connector. Deterministic stub with a midday rotation and a
/// slightly cheaper fare than FlyOne.
pub struct Blackstone;

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
impl Provider for Blackstone {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn search(&self, req: &SearchRequest) -> Result<Vec<ProviderOffer>, ProviderError> {
        if req.origin.is_empty() || req.destination.is_empty() {
            return Ok(Vec::new());
        }

        // Departs 11:10, arrives 15:50
        let outbound = Itinerary::new(vec![leg(
            &req.origin,
            &req.destination,
            "BS 401",
            at(req.depart, 11, 10),
            at(req.depart, 15, 50),
        )]);

        let inbound = match (req.trip, req.return_date) {
            (TripType::Round, Some(ret)) => Some(Itinerary::new(vec![leg(
                &req.destination,
                &req.origin,
                "BS 402",
                at(ret, 17, 45),
                at(ret, 22, 20),
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
            deeplink: Some("https://www.blackstone.am/".to_string()),
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfare_core::PassengerMix;

    fn round_trip() -> SearchRequest {
        SearchRequest {
            origin: "BCN".into(),
            destination: "EVN".into(),
            depart: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 9, 20),
            trip: TripType::Round,
            cabin: Some(Cabin::Business),
            passengers: PassengerMix::adults(2),
            bags: 0,
        }
    }

    #[tokio::test]
    async fn test_round_trip_offer() {
        let offers = Blackstone.search(&round_trip()).await.unwrap();
        assert_eq!(offers.len(), 1);

        let offer = &offers[0];
        assert_eq!(offer.id, "blackstone-BCN-EVN-2025-09-10");
        assert_eq!(offer.price.total, Money::eur(18_900));
        assert_eq!(offer.cabin, Some(Cabin::Business));

        // 11:10 -> 15:50 is 4h40m out, 17:45 -> 22:20 is 4h35m back
        assert_eq!(offer.outbound.segments[0].duration_minutes, 280);
        let inbound = offer.inbound.as_ref().expect("inbound itinerary");
        assert_eq!(inbound.segments[0].duration_minutes, 275);
        assert_eq!(inbound.origin(), Some("EVN"));
        assert_eq!(inbound.destination(), Some("BCN"));
    }

    #[tokio::test]
    async fn test_one_way_has_no_inbound() {
        let mut req = round_trip();
        req.trip = TripType::OneWay;
        req.return_date = None;

        let offers = Blackstone.search(&req).await.unwrap();
        assert!(offers[0].inbound.is_none());
    }
}
