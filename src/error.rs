/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Error type returned by every Sendflare API operation
///
/// Each variant marks the step of the request/response round trip that failed.
/// None of them is retried by the client; the caller decides what to do.
#[derive(Debug)]
pub enum AppError {
    /// The request could not be encoded to its wire form
    SerializationError(String),
    /// The request URL could not be built
    InvalidUrl(String),
    /// DNS, connect, TLS, timeout or write failure during the exchange
    Network(reqwest::Error),
    /// The response body could not be fully read
    Read(reqwest::Error),
    /// The response body did not decode into the expected shape
    Deserialization(String),
    /// The service answered `401 Unauthorized`
    Unauthorized,
    /// The service answered `404 Not Found`
    NotFound,
    /// The service answered `429 Too Many Requests`
    RateLimitExceeded,
    /// The service answered any other non-success status
    Unexpected(StatusCode),
}

impl AppError {
    /// Returns true when the transport failed because the request timed out
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Network(e) | AppError::Read(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns the HTTP status behind a status error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::RateLimitExceeded => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Unexpected(status) => Some(*status),
            AppError::Network(e) | AppError::Read(e) => e.status(),
            _ => None,
        }
    }

    /// Maps a non-success HTTP status to its error variant
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
            other => AppError::Unexpected(other),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Read(e) => write!(f, "read error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) | AppError::Read(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}
