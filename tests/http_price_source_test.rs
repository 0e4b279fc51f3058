use chrono::{Duration, Utc};
use httpmock::prelude::*;
use train_estimator::{
    EstimateError, HttpPriceSource, Passenger, PriceSource, TrainTicketEstimator, TripDetails,
    TripRequest,
};

#[tokio::test]
async fn fetches_the_quoted_price() {
    let server = MockServer::start();
    let when = Utc::now() + Duration::days(40);

    let quote_mock = server.mock(|when_req, then| {
        when_req
            .method(GET)
            .path("/api/train/estimate/price")
            .query_param("from", "Bordeaux")
            .query_param("to", "Paris")
            .query_param("date", when.timestamp().to_string());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "price": 100.0 }));
    });

    let source = HttpPriceSource::new(server.url("/api/train/estimate/price"));
    let price = source.base_price("Bordeaux", "Paris", when).await.unwrap();

    quote_mock.assert();
    assert_eq!(price, 100.0);
}

#[tokio::test]
async fn server_errors_surface_as_api_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/train/estimate/price");
        then.status(500);
    });

    let source = HttpPriceSource::new(server.url("/api/train/estimate/price"));
    let err = source
        .base_price("Bordeaux", "Paris", Utc::now() + Duration::days(40))
        .await
        .unwrap_err();
    assert!(matches!(err, EstimateError::ApiError(_)));
}

#[tokio::test]
async fn negative_price_means_no_quote() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/train/estimate/price");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "price": -1 }));
    });

    let source = HttpPriceSource::new(server.url("/api/train/estimate/price"));
    let err = source
        .base_price("Bordeaux", "Paris", Utc::now() + Duration::days(40))
        .await
        .unwrap_err();
    assert!(matches!(err, EstimateError::InvalidApiResponse { .. }));
}

#[tokio::test]
async fn end_to_end_estimate_over_http() -> anyhow::Result<()> {
    let server = MockServer::start();
    let quote_mock = server.mock(|when, then| {
        when.method(GET).path("/api/train/estimate/price");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "price": 100.0 }));
    });

    let source = HttpPriceSource::new(server.url("/api/train/estimate/price"));
    let estimator = TrainTicketEstimator::new(source);

    // One adult booked 40 days ahead: +20% adult, -20% advance booking.
    let request = TripRequest::new(
        TripDetails::new("Bordeaux", "Paris", Utc::now() + Duration::days(40)),
        vec![Passenger::new(20, vec![])],
    );
    let total = estimator.estimate(&request).await?;

    quote_mock.assert();
    assert!((total - 100.0).abs() < 1e-6);
    Ok(())
}
