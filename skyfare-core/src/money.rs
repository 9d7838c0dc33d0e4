use serde::{Deserialize, Serialize};

/// Monetary amount in integer minor units (cents for EUR/USD).
///
/// Prices never pass through floating point; all arithmetic stays on the
/// integer minor-unit representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub amount_minor: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount_minor: i64, currency: &str) -> Self {
        Self {
            amount_minor,
            currency: currency.to_string(),
        }
    }

    pub fn eur(amount_minor: i64) -> Self {
        Self::new(amount_minor, "EUR")
    }
}

/// Offer price: total is required, breakdown fields are provider-optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub total: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_adult: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_child: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_infant: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,
}

impl Price {
    pub fn of_total(total: Money) -> Self {
        Self {
            total,
            base: None,
            taxes: None,
            per_adult: None,
            per_child: None,
            per_infant: None,
            fees: None,
        }
    }
}
