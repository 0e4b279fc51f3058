pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod hello;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpPriceSource;
pub use core::estimator::TrainTicketEstimator;
pub use domain::model::{DiscountCard, Passenger, TripDetails, TripRequest};
pub use domain::ports::PriceSource;
pub use utils::error::{EstimateError, Result};
