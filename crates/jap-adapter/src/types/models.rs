/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// One orderable service from the panel catalog.
///
/// `rate`, `min` and `max` arrive as strings on the wire even though they
/// look numeric; they are kept as text because upstream formatting (decimal
/// places, leading zeros) is not guaranteed stable. Callers parse them when
/// they need numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub service: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub category: String,
    pub rate: String,
    pub min: String,
    pub max: String,
    #[serde(default)]
    pub refill: bool,
    #[serde(default)]
    pub cancel: bool,
}

/// Per-order state as reported by the `status` action.
///
/// The panel omits fields it has nothing to say about, so everything
/// defaults. `charge`, `start_count` and `remains` are numeric-looking
/// strings, kept as text like the catalog fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatus {
    #[serde(default)]
    pub charge: String,
    #[serde(default)]
    pub start_count: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remains: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
