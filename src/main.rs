use clap::Parser;
use train_estimator::utils::{logger, validation::Validate};
use train_estimator::{CliConfig, HttpPriceSource, TrainTicketEstimator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting train-estimator CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let request = match config.trip_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Could not build trip request: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let prices = HttpPriceSource::new(config.api_endpoint.clone());
    let estimator = TrainTicketEstimator::new(prices);

    match estimator.estimate(&request).await {
        Ok(total) => {
            tracing::info!("Estimate completed: {:.2}", total);
            println!(
                "{} -> {}: {:.2} for {} passenger(s)",
                request.details.from,
                request.details.to,
                total,
                request.passengers.len()
            );
        }
        Err(e) => {
            tracing::error!("Estimate failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
