use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{LookupRequest, WeatherSummary};

pub mod openweather;

/// Failure of a single lookup. Every variant is terminal for that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A required input was empty; no request was sent.
    #[error("Invalid lookup request: {0}")]
    InvalidRequest(String),

    /// Network failure, or a response body that could not be understood.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The provider rejected the request; carries its `message` verbatim.
    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::TransportFailure(format!("malformed response body: {err}"))
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn lookup(&self, request: &LookupRequest) -> Result<WeatherSummary, LookupError>;
}

/// Checks that city, country and credential are all present.
pub fn validate(request: &LookupRequest) -> Result<(), LookupError> {
    let fields = [
        ("city", &request.city),
        ("country", &request.country),
        ("api key", &request.api_key),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(LookupError::InvalidRequest(format!("{name} must not be empty")));
        }
    }

    Ok(())
}
