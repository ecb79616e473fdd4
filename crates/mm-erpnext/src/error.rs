use mm_core::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during ERPNext API calls
#[derive(Error, Debug)]
pub enum ErpNextError {
    /// The key/secret pair is not configured. The read path degrades to an
    /// empty result instead of raising this; the write path never does.
    #[error("ERPNext API credentials are not configured {location}")]
    MissingCredentials { location: ErrorLocation },

    /// The request never produced a usable response.
    #[error("HTTP request error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The read path answered with a non-success status.
    #[error("ERPNext answered HTTP {status} {location}")]
    Status {
        status: StatusCode,
        location: ErrorLocation,
    },

    /// The write path was rejected. `message` carries the server's own
    /// text when the error body held one, else the fixed fallback.
    #[error("ERPNext rejected the request: {message} (HTTP {status}) {location}")]
    Rejected {
        message: String,
        status: StatusCode,
        location: ErrorLocation,
    },

    /// A response body that should have been JSON wasn't.
    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ErpNextError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ErpNextError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ErpNextError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a missing-credentials error with location
    #[track_caller]
    pub fn missing_credentials() -> Self {
        ErpNextError::MissingCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a non-success status error with location
    #[track_caller]
    pub fn status(status: StatusCode) -> Self {
        ErpNextError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a rejection error with location
    #[track_caller]
    pub fn rejected(message: String, status: StatusCode) -> Self {
        ErpNextError::Rejected {
            message,
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ErpNextError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ErpNextError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ErpNextError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ErpNextError::from_json(err)
    }
}

pub type Result<T> = StdResult<T, ErpNextError>;
