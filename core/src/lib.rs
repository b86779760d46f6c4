//! Async API client core for the Mars real-estate service.
//!
//! # Overview
//! Fetches the listing catalogue from `<base_url>/realestate` and decodes it
//! into [`MarsProperty`] records.
//!
//! # Design
//! - `MarsClient` is the sans-IO core: it builds an `HttpRequest` and parses
//!   an `HttpResponse`, so status and decode handling are testable without
//!   a network.
//! - `MarsApi` executes those requests asynchronously with `reqwest`.
//! - `mars_api()` hands out one lazily built, process-wide `MarsApi`;
//!   callers that prefer explicit wiring construct their own.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod global;
pub mod http;
pub mod types;

pub use api::MarsApi;
pub use client::MarsClient;
pub use codec::{build_codec, Codec};
pub use config::ClientConfig;
pub use error::{ApiError, NetworkError};
pub use global::mars_api;
pub use http::{HttpRequest, HttpResponse};
pub use types::MarsProperty;
