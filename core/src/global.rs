//! Process-wide shared `MarsApi`.
//!
//! Prefer constructing a `MarsApi` at startup and passing it down. This
//! accessor exists for code that has no such wiring; it builds the client
//! against the public server on first use and hands out the same instance
//! afterwards.

use once_cell::sync::OnceCell;

use crate::api::MarsApi;
use crate::config::ClientConfig;
use crate::error::ApiError;

static MARS_API: OnceCell<MarsApi> = OnceCell::new();

/// Return the shared client, constructing it on first access.
///
/// Concurrent first callers block until one of them finishes
/// initialization, so at most one instance is ever built. A failed
/// construction leaves the cell empty and is reported to that caller.
pub fn mars_api() -> Result<&'static MarsApi, ApiError> {
    MARS_API.get_or_try_init(|| MarsApi::new(ClientConfig::default()))
}
