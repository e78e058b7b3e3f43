use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Gemini API key is not configured {location}")]
    MissingApiKey { location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Rate limited (429): {message} {location}")]
    RateLimited {
        message: String,
        /// Delay suggested by the API, if any
        retry_after: Option<Duration>,
        location: ErrorLocation,
    },

    #[error("Upstream error ({status}): {message} {location}")]
    Upstream {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response body: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl GeminiError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GeminiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GeminiError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Map a non-success HTTP status to an error
    #[track_caller]
    pub fn from_status(status: u16, message: String, retry_after: Option<Duration>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if status == 429 {
            GeminiError::RateLimited {
                message,
                retry_after,
                location,
            }
        } else {
            GeminiError::Upstream {
                status,
                message,
                location,
            }
        }
    }

    /// True when the upstream message says the quota is exhausted
    pub fn mentions_quota(&self) -> bool {
        match self {
            GeminiError::RateLimited { message, .. } | GeminiError::Upstream { message, .. } => {
                message.to_lowercase().contains("quota")
            }
            _ => false,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GeminiError::RateLimited { .. })
    }
}

impl From<reqwest::Error> for GeminiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GeminiError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GeminiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GeminiError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, GeminiError>;
