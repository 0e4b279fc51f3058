//! Fare constants. Flat fares are absolute prices; rates are fractions of the
//! base fare, summed per passenger and applied once.

/// Children aged 1 to 3 pay a flat fare regardless of any card.
pub const CHILD_FLAT_FARE: f64 = 9.0;

/// TrainStroke staff card: symbolic flat fare.
pub const TRAIN_STROKE_FLAT_FARE: f64 = 1.0;

pub const MINOR_RATE: f64 = -0.4;
pub const SENIOR_AGE_RATE: f64 = -0.2;
pub const ADULT_RATE: f64 = 0.2;

/// Booked at least 30 days before departure.
pub const ADVANCE_BOOKING_RATE: f64 = -0.2;

/// Between 5 and 30 days ahead the fare climbs 2% per day under the
/// 20-day mark.
pub const DAILY_STEP_RATE: f64 = 0.02;

/// Departure within the next 6 hours.
pub const LAST_MINUTE_RATE: f64 = -0.2;

/// Between 6 hours and 5 days ahead: full-fare surcharge.
pub const FULL_FARE_RATE: f64 = 1.0;

pub const FAMILY_CARD_RATE: f64 = -0.3;
pub const SENIOR_CARD_RATE: f64 = -0.2;
pub const COUPLE_CARD_RATE: f64 = -0.2;
pub const HALF_COUPLE_CARD_RATE: f64 = -0.1;
