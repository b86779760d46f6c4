//! Stateless HTTP request builder and response parser for the Mars API.
//!
//! # Design
//! `MarsClient` holds only a `base_url` and a codec and carries no mutable
//! state between calls. The single operation is split into
//! `build_get_properties`, which produces an `HttpRequest`, and
//! `parse_get_properties`, which consumes an `HttpResponse`. The caller
//! executes the actual HTTP round-trip.

use crate::codec::{build_codec, Codec};
use crate::error::{ApiError, NetworkError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::MarsProperty;

/// Path of the listings endpoint, relative to the base URL.
pub const PROPERTIES_PATH: &str = "realestate";

/// Synchronous, stateless client for the Mars API.
#[derive(Debug, Clone)]
pub struct MarsClient {
    base_url: String,
    codec: Codec,
}

impl MarsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            codec: build_codec(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_properties(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/{PROPERTIES_PATH}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_get_properties(&self, response: HttpResponse) -> Result<Vec<MarsProperty>, ApiError> {
        check_status(&response)?;
        self.codec.decode_properties(&response.body)
    }
}

/// Map any non-2xx status to `NetworkError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), NetworkError> {
    if response.is_success() {
        return Ok(());
    }
    Err(NetworkError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
