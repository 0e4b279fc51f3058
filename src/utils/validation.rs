use crate::utils::error::{EstimateError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EstimateError::config(format!(
            "{}: URL cannot be empty",
            field_name
        )));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EstimateError::config(format!(
                "{}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(EstimateError::config(format!(
            "{}: invalid URL format: {}",
            field_name, e
        ))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EstimateError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}
