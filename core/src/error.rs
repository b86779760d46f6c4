//! Error types for the Mars API client.
//!
//! # Design
//! Callers only ever need to tell two situations apart: the request never
//! produced a usable response (`Network`), or it did but the body was not a
//! list of listings (`Decode`). `NetworkError` keeps the detail of which
//! transport step failed for debugging.

use thiserror::Error;

/// Errors returned by `MarsClient::parse_*` and `MarsApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed or the server rejected it.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The response body is not valid JSON or not the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection refused, DNS failure, timeout, or a broken body stream.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(NetworkError::Transport(err))
    }
}
