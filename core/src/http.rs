//! HTTP transport types for the host-does-IO split.
//!
//! # Design
//! `MarsClient` builds an `HttpRequest` and parses an `HttpResponse` without
//! touching the network. Whoever executes the round-trip (the async
//! `MarsApi`, or a blocking agent in tests) only moves these plain values
//! across. The API only ever issues GET, so the method is implied.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
