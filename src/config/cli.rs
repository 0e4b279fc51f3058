use crate::domain::model::{DiscountCard, Passenger, TripDetails, TripRequest};
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "train-estimator")]
#[command(about = "Estimate the total ticket price for a train trip")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "https://sncftrenitaliadb.com/api/train/estimate/price"
    )]
    pub api_endpoint: String,

    #[arg(long, help = "Departure city")]
    pub from: String,

    #[arg(long, help = "Destination city")]
    pub to: String,

    #[arg(long, help = "Departure date, RFC 3339 or YYYY-MM-DD")]
    pub when: String,

    #[arg(
        long = "passenger",
        help = "Passenger spec AGE[:CARD+CARD][:LASTNAME], repeatable"
    )]
    pub passengers: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn trip_request(&self) -> Result<TripRequest> {
        let when = parse_departure(&self.when)?;
        let passengers = self
            .passengers
            .iter()
            .map(|spec| parse_passenger(spec))
            .collect::<Result<Vec<_>>>()?;

        Ok(TripRequest::new(
            TripDetails::new(&self.from, &self.to, when),
            passengers,
        ))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("from", &self.from)?;
        validate_non_empty_string("to", &self.to)?;
        validate_non_empty_string("when", &self.when)?;
        Ok(())
    }
}

fn parse_departure(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(when) = DateTime::parse_from_rfc3339(value) {
        return Ok(when.with_timezone(&Utc));
    }
    if let Ok(when) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(when.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(when) = date.and_hms_opt(0, 0, 0) {
            return Ok(when.and_utc());
        }
    }
    Err(EstimateError::config(format!(
        "unrecognized departure date: {}",
        value
    )))
}

/// `AGE[:CARD+CARD][:LASTNAME]`, e.g. `30`, `72:senior`, `35:family:Martin`.
fn parse_passenger(spec: &str) -> Result<Passenger> {
    let mut parts = spec.splitn(3, ':');

    let age_part = parts.next().unwrap_or_default();
    let age: i32 = age_part.trim().parse().map_err(|_| {
        EstimateError::config(format!("invalid passenger age in spec: {}", spec))
    })?;

    let discounts = match parts.next().map(str::trim).filter(|c| !c.is_empty()) {
        Some(cards) => cards
            .split('+')
            .map(|card| card.parse::<DiscountCard>())
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    let last_name = parts
        .next()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(Passenger {
        age,
        discounts,
        last_name,
    })
}
