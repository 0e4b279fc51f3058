use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid trip request: {message}")]
    InvalidTripInput { message: String },

    #[error("Price API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Price API returned an unusable response: {message}")]
    InvalidApiResponse { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl EstimateError {
    pub fn invalid_trip(message: impl Into<String>) -> Self {
        EstimateError::InvalidTripInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        EstimateError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
