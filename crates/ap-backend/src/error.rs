use crate::error_codes;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coded failure returned by every backend operation
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl BackendError {
    /// Machine-readable category used for message mapping
    pub fn code(&self) -> &str {
        match self {
            Self::Http { .. } => error_codes::NETWORK_REQUEST_FAILED,
            Self::Api { code, .. } => code,
            Self::Json { .. } | Self::Decode { .. } => error_codes::INVALID_RESPONSE,
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        BackendError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        BackendError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        BackendError::Api {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a decode error with location
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        BackendError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for BackendError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        BackendError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for BackendError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        BackendError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
