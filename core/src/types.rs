//! Domain DTOs for the Mars real-estate API.
//!
//! # Design
//! Field names follow Rust conventions; `#[serde(rename)]` pins each one to
//! the key the server actually sends. The mapping is strict: every key is
//! required and unknown keys are ignored. The mock-server crate defines its
//! own copy of this shape and integration tests catch any drift.

use serde::{Deserialize, Serialize};

/// Listing type the server uses for rentals. Everything else is for sale.
pub const RENTAL_KIND: &str = "rent";

/// A single real-estate listing returned by `/realestate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarsProperty {
    pub id: String,
    #[serde(rename = "img_src")]
    pub img_src_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

impl MarsProperty {
    pub fn is_rental(&self) -> bool {
        self.kind == RENTAL_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(kind: &str) -> MarsProperty {
        MarsProperty {
            id: "424905".to_string(),
            img_src_url: "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000MR0044631300503690E01_DXXX.jpg"
                .to_string(),
            kind: kind.to_string(),
            price: 450_000.0,
        }
    }

    #[test]
    fn rent_is_rental() {
        assert!(property("rent").is_rental());
    }

    #[test]
    fn buy_is_not_rental() {
        assert!(!property("buy").is_rental());
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(property("buy")).unwrap();
        assert_eq!(json["id"], "424905");
        assert_eq!(json["type"], "buy");
        assert_eq!(json["price"], 450_000.0);
        assert!(json["img_src"].as_str().unwrap().starts_with("http://mars.jpl.nasa.gov/"));
        assert!(json.get("kind").is_none());
        assert!(json.get("img_src_url").is_none());
    }
}
