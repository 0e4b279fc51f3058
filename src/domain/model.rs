use crate::utils::error::EstimateError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountCard {
    Senior,
    TrainStroke,
    Couple,
    HalfCouple,
    Family,
}

impl FromStr for DiscountCard {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "senior" => Ok(DiscountCard::Senior),
            "trainstroke" => Ok(DiscountCard::TrainStroke),
            "couple" => Ok(DiscountCard::Couple),
            "halfcouple" => Ok(DiscountCard::HalfCouple),
            "family" => Ok(DiscountCard::Family),
            other => Err(EstimateError::config(format!(
                "unknown discount card: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub age: i32,
    pub discounts: Vec<DiscountCard>,
    pub last_name: Option<String>,
}

impl Passenger {
    pub fn new(age: i32, discounts: Vec<DiscountCard>) -> Self {
        Self {
            age,
            discounts,
            last_name: None,
        }
    }

    pub fn with_last_name(age: i32, discounts: Vec<DiscountCard>, last_name: &str) -> Self {
        Self {
            age,
            discounts,
            last_name: Some(last_name.to_string()),
        }
    }

    pub fn has_card(&self, card: DiscountCard) -> bool {
        self.discounts.contains(&card)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetails {
    pub from: String,
    pub to: String,
    pub when: DateTime<Utc>,
}

impl TripDetails {
    pub fn new(from: &str, to: &str, when: DateTime<Utc>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            when,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub details: TripDetails,
    pub passengers: Vec<Passenger>,
}

impl TripRequest {
    pub fn new(details: TripDetails, passengers: Vec<Passenger>) -> Self {
        Self {
            details,
            passengers,
        }
    }
}
