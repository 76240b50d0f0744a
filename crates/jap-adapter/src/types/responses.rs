/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::models::OrderStatus;

/// Response of the `add` action.
///
/// On success the panel sends `{"order": N}`; on rejection it can send
/// `{"error": "..."}` instead, so both fields default and the order path
/// decides which one it is looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AddOrderResponse {
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of the `status` action: statuses keyed by order id.
///
/// The mapping shape is used even for single-order queries; the panel is
/// documented to sometimes answer those with a flat object instead, which
/// then surfaces as a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    #[serde(rename = "orderStatus", default)]
    pub order_status: HashMap<String, OrderStatus>,
}

/// Response of the `balance` action. The amount is a numeric-looking
/// string and stays text, like every rate field in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBalanceResponse {
    pub balance: String,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_order_response_error_shape() {
        let body = r#"{"error": "Incorrect request"}"#;
        let response: AddOrderResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(response.order, 0);
        assert_eq!(response.error.as_deref(), Some("Incorrect request"));
    }

    #[test]
    fn test_order_status_response_mapping() {
        let body = r#"{"orderStatus": {"42": {"status": "Completed", "remains": "0"}}}"#;
        let response: OrderStatusResponse = serde_json::from_str(body).expect("deserialize");
        let status = response.order_status.get("42").expect("order 42");
        assert_eq!(status.status, "Completed");
        assert_eq!(status.remains, "0");
    }
}
