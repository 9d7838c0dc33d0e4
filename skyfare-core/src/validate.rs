use chrono::NaiveDate;
use serde::Deserialize;

use crate::search::{Cabin, PassengerMix, SearchRequest, TripType};

/// Search input exactly as it arrives from the query string, before any
/// validation or coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub depart: Option<String>,
    #[serde(rename = "return")]
    pub return_date: Option<String>,
    pub trip: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub infants: Option<String>,
    pub bags: Option<String>,
    pub cabin: Option<String>,
}

/// Rejection of a raw request, surfaced to the caller as a 4xx.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("invalid IATA code: {0}")]
    InvalidLocationCode(String),
    #[error("invalid {field} date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

fn present(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}

/// Non-negative integer floor coercion: absent, non-numeric or negative
/// input falls back to the default.
fn to_count(v: Option<&str>, default: u32) -> u32 {
    let Some(s) = present(v) else {
        return default;
    };
    if let Ok(n) = s.parse::<u32>() {
        return n;
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.floor() as u32,
        _ => default,
    }
}

/// Uppercase and check the 3-letter IATA shape.
fn location_code(v: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    let s = present(v).ok_or(ValidationError::MissingRequiredField(field))?;
    let code = s.to_ascii_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(ValidationError::InvalidLocationCode(code))
    }
}

fn date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl SearchRequest {
    /// Validate and normalize raw query input into a well-formed request.
    ///
    /// Pure function; no provider is consulted before this succeeds.
    pub fn from_raw(raw: &RawSearchQuery) -> Result<Self, ValidationError> {
        let origin = location_code(raw.origin.as_deref(), "origin")?;
        let destination = location_code(raw.destination.as_deref(), "destination")?;

        // Unrecognized trip kinds fall back to round, as the search form does
        let trip = match present(raw.trip.as_deref()) {
            Some("oneway") => TripType::OneWay,
            _ => TripType::Round,
        };

        let depart_raw =
            present(raw.depart.as_deref()).ok_or(ValidationError::MissingRequiredField("depart"))?;
        let depart = date("depart", depart_raw)?;

        let return_date = match trip {
            TripType::Round => {
                let raw_ret = present(raw.return_date.as_deref())
                    .ok_or(ValidationError::MissingRequiredField("return"))?;
                Some(date("return", raw_ret)?)
            }
            TripType::OneWay => None,
        };

        let cabin = present(raw.cabin.as_deref()).and_then(|c| match c {
            "economy" => Some(Cabin::Economy),
            "premium_economy" => Some(Cabin::PremiumEconomy),
            "business" => Some(Cabin::Business),
            // Unrecognized cabins are ignored, not rejected
            _ => None,
        });

        Ok(SearchRequest {
            origin,
            destination,
            depart,
            return_date,
            trip,
            cabin,
            passengers: PassengerMix {
                adults: to_count(raw.adults.as_deref(), 1).max(1),
                children: to_count(raw.children.as_deref(), 0),
                infants: to_count(raw.infants.as_deref(), 0),
            },
            bags: to_count(raw.bags.as_deref(), 0),
        })
    }
}
