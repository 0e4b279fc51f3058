pub mod estimator;
pub mod tariff;

pub use crate::domain::model::{DiscountCard, Passenger, TripDetails, TripRequest};
pub use crate::domain::ports::PriceSource;
pub use crate::utils::error::Result;
