use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of the base fare for a route on a given date. The HTTP adapter is the
/// production implementation; tests substitute a fixed-price stub.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn base_price(&self, from: &str, to: &str, when: DateTime<Utc>) -> Result<f64>;
}
