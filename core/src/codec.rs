//! JSON codec for listing payloads.
//!
//! The mapping itself lives in the `serde` derives on [`MarsProperty`]; the
//! codec is the single place that turns response text into records so the
//! sans-IO core and the transport agree on error classification.

use crate::error::ApiError;
use crate::types::MarsProperty;

/// Stateless JSON codec. Cheap to copy and safe to share across tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    _private: (),
}

pub fn build_codec() -> Codec {
    Codec::default()
}

impl Codec {
    /// Decode a JSON array of listings, keeping the server's order.
    pub fn decode_properties(&self, body: &str) -> Result<Vec<MarsProperty>, ApiError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn encode_properties(&self, properties: &[MarsProperty]) -> Result<String, ApiError> {
        Ok(serde_json::to_string(properties)?)
    }
}
