use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One flight leg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub marketing_carrier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_carrier: Option<String>,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
}

impl Segment {
    /// Rounded-minute delta between two timestamps, clamped at zero.
    pub fn minutes_between(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> u32 {
        let secs = (arrival - departure).num_seconds();
        if secs <= 0 {
            return 0;
        }
        ((secs + 30) / 60) as u32
    }
}

/// Ordered, non-empty sequence of segments for one direction of travel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub segments: Vec<Segment>,
}

impl Itinerary {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.segments.iter().map(|s| s.duration_minutes).sum()
    }

    pub fn origin(&self) -> Option<&str> {
        self.segments.first().map(|s| s.origin.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.segments.last().map(|s| s.destination.as_str())
    }

    /// Connecting itineraries must chain: segment i lands where i+1 departs.
    pub fn is_connected(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].destination == pair[1].origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 10, h, m, 0).unwrap()
    }

    fn leg(origin: &str, destination: &str, dep: DateTime<Utc>, arr: DateTime<Utc>) -> Segment {
        Segment {
            marketing_carrier: "5F".into(),
            operating_carrier: None,
            flight_number: "5F 701".into(),
            origin: origin.into(),
            destination: destination.into(),
            departure: dep,
            arrival: arr,
            duration_minutes: Segment::minutes_between(dep, arr),
            aircraft: None,
        }
    }

    #[test]
    fn test_minutes_between_rounds_to_minute() {
        assert_eq!(Segment::minutes_between(ts(9, 0), ts(13, 30)), 270);
        // 29 extra seconds round down, 30 round up
        let base = ts(9, 0);
        assert_eq!(
            Segment::minutes_between(base, base + chrono::Duration::seconds(89)),
            1
        );
        assert_eq!(
            Segment::minutes_between(base, base + chrono::Duration::seconds(90)),
            2
        );
    }

    #[test]
    fn test_minutes_between_clamps_negative() {
        assert_eq!(Segment::minutes_between(ts(13, 30), ts(9, 0)), 0);
    }

    #[test]
    fn test_connected_itinerary() {
        let direct = Itinerary::new(vec![leg("BCN", "EVN", ts(9, 0), ts(13, 30))]);
        assert!(direct.is_connected());
        assert_eq!(direct.origin(), Some("BCN"));
        assert_eq!(direct.destination(), Some("EVN"));

        let connecting = Itinerary::new(vec![
            leg("BCN", "IST", ts(9, 0), ts(12, 0)),
            leg("IST", "EVN", ts(13, 0), ts(16, 0)),
        ]);
        assert!(connecting.is_connected());
        assert_eq!(connecting.duration_minutes(), 360);

        let broken = Itinerary::new(vec![
            leg("BCN", "IST", ts(9, 0), ts(12, 0)),
            leg("VIE", "EVN", ts(13, 0), ts(16, 0)),
        ]);
        assert!(!broken.is_connected());
    }
}
