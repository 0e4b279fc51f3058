use crate::core::tariff;
use crate::domain::model::{DiscountCard, Passenger, TripRequest};
use crate::domain::ports::PriceSource;
use crate::utils::error::{EstimateError, Result};
use chrono::{DateTime, Duration, Utc};

pub struct TrainTicketEstimator<P: PriceSource> {
    prices: P,
}

impl<P: PriceSource> TrainTicketEstimator<P> {
    pub fn new(prices: P) -> Self {
        Self { prices }
    }

    pub async fn estimate(&self, request: &TripRequest) -> Result<f64> {
        if request.passengers.is_empty() {
            return Ok(0.0);
        }

        let now = Utc::now();
        validate_request(request, now)?;

        tracing::debug!(
            "Fetching base fare for {} -> {} on {}",
            request.details.from,
            request.details.to,
            request.details.when
        );
        let base_price = self
            .prices
            .base_price(
                &request.details.from,
                &request.details.to,
                request.details.when,
            )
            .await?;
        tracing::debug!("Base fare: {}", base_price);

        let total: f64 = request
            .passengers
            .iter()
            .map(|p| passenger_price(p, &request.passengers, base_price, request.details.when, now))
            .sum();

        Ok(total)
    }
}

fn validate_request(request: &TripRequest, now: DateTime<Utc>) -> Result<()> {
    if request.details.from.trim().is_empty() {
        return Err(EstimateError::invalid_trip("Start city is invalid"));
    }
    if request.details.to.trim().is_empty() {
        return Err(EstimateError::invalid_trip("Destination city is invalid"));
    }

    let start_of_today = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(now);
    if request.details.when < start_of_today {
        return Err(EstimateError::invalid_trip("Date is invalid"));
    }

    if request.passengers.iter().any(|p| p.age < 0) {
        return Err(EstimateError::invalid_trip("Age is invalid"));
    }

    Ok(())
}

fn passenger_price(
    passenger: &Passenger,
    all: &[Passenger],
    base_price: f64,
    when: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    if passenger.age < 1 {
        return 0.0;
    }
    // The child flat fare wins over every card, the staff card over the rest.
    if passenger.age < 4 {
        return tariff::CHILD_FLAT_FARE;
    }
    if passenger.has_card(DiscountCard::TrainStroke) {
        return tariff::TRAIN_STROKE_FLAT_FARE;
    }

    let rate = age_rate(passenger.age) + booking_date_rate(when, now) + card_rate(passenger, all);
    base_price + base_price * rate
}

fn age_rate(age: i32) -> f64 {
    if age <= 17 {
        tariff::MINOR_RATE
    } else if age >= 70 {
        tariff::SENIOR_AGE_RATE
    } else {
        tariff::ADULT_RATE
    }
}

fn booking_date_rate(when: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let thirty_days_ahead = now + Duration::days(30);
    let five_days_ahead = now + Duration::days(5);
    let six_hours_ahead = now + Duration::hours(6);

    if when >= thirty_days_ahead {
        tariff::ADVANCE_BOOKING_RATE
    } else if when > five_days_ahead {
        (20.0 - days_between(when, now)) * tariff::DAILY_STEP_RATE
    } else if when <= six_hours_ahead {
        tariff::LAST_MINUTE_RATE
    } else {
        tariff::FULL_FARE_RATE
    }
}

fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    let diff_seconds = (a - b).num_seconds().abs() as f64;
    (diff_seconds / 86_400.0).ceil()
}

fn card_rate(passenger: &Passenger, all: &[Passenger]) -> f64 {
    // A family card held by any relative replaces every other card rate.
    if let Some(last_name) = passenger.last_name.as_deref().filter(|n| !n.is_empty()) {
        let family_card_in_group = all.iter().any(|other| {
            other.has_card(DiscountCard::Family) && other.last_name.as_deref() == Some(last_name)
        });
        if family_card_in_group {
            return tariff::FAMILY_CARD_RATE;
        }
    }

    let mut rate = 0.0;

    if passenger.has_card(DiscountCard::Senior) && passenger.age >= 70 {
        rate += tariff::SENIOR_CARD_RATE;
    }

    if all.len() == 2 {
        let has_couple_card = all.iter().any(|p| p.has_card(DiscountCard::Couple));
        let all_adults = all.iter().all(|p| p.age >= 18);
        if has_couple_card && all_adults {
            rate += tariff::COUPLE_CARD_RATE;
        }
    }

    if all.len() == 1 && passenger.has_card(DiscountCard::HalfCouple) && passenger.age > 18 {
        rate += tariff::HALF_COUPLE_CARD_RATE;
    }

    rate
}
