use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ap_config::ConfigError),

    #[error("Backend error: {0}")]
    Backend(#[from] ap_backend::BackendError),

    #[error("Invalid input: {0}")]
    Core(#[from] ap_core::CoreError),

    #[error("Sign-in failed: {message}")]
    Auth { message: String },

    #[error("Sign-in cancelled: {message}")]
    Cancelled { message: String },

    #[error("User not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Usage error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Prompt error: {message} {location}")]
    Prompt {
        message: String,
        location: ErrorLocation,
        #[source]
        source: dialoguer::Error,
    },

    #[error("I/O error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        CliError::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn prompt(err: dialoguer::Error) -> Self {
        CliError::Prompt {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn io<S: Into<String>>(message: S, err: std::io::Error) -> Self {
        CliError::Io {
            message: format!("{}: {err}", message.into()),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
