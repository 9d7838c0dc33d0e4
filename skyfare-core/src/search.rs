use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip direction requested by the traveller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    OneWay,
    Round,
}

/// Cabin preference, passed through to providers that support it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    Economy,
    PremiumEconomy,
    Business,
}

/// Passengers by type. Infants are under 2 and do not occupy a seat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerMix {
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

impl PassengerMix {
    pub fn adults(adults: u32) -> Self {
        Self {
            adults,
            children: 0,
            infants: 0,
        }
    }

    /// Seated travellers only (infants sit on a lap).
    pub fn seated(&self) -> u32 {
        self.adults + self.children
    }
}

/// Normalized search query shared by every provider.
///
/// Invariants, guaranteed by the validator in [`crate::validate`]:
/// `return_date` is set iff `trip` is `Round`; `passengers.adults >= 1`;
/// `origin`/`destination` are 3-letter uppercase IATA codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub depart: NaiveDate,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    pub trip: TripType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin: Option<Cabin>,
    pub passengers: PassengerMix,
    #[serde(default)]
    pub bags: u32,
}

impl SearchRequest {
    pub fn is_round(&self) -> bool {
        self.trip == TripType::Round
    }
}
