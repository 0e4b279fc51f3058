use crate::domain::ports::PriceSource;
use crate::utils::error::{EstimateError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

/// Price quotes from the shared SNCF/Trenitalia fare endpoint:
/// `GET {endpoint}?from=..&to=..&date=<unix timestamp>` returning `{"price": n}`.
pub struct HttpPriceSource {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: f64,
}

impl HttpPriceSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn base_price(&self, from: &str, to: &str, when: DateTime<Utc>) -> Result<f64> {
        tracing::debug!("Requesting fare quote from: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("from", from),
                ("to", to),
                ("date", &when.timestamp().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Fare API response status: {}", response.status());
        let body: PriceResponse = response.json().await?;

        // The fare service reports "no quote" as a negative price.
        if body.price < 0.0 {
            return Err(EstimateError::InvalidApiResponse {
                message: format!("no fare available (price={})", body.price),
            });
        }

        Ok(body.price)
    }
}
