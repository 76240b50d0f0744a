/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - wire payloads sent to the panel endpoint
[UPDATE]: When API schema changes or new actions added
*/

use serde::Serialize;

/// Payload for actions that carry no parameters beyond the key
/// (`services`, `balance`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ActionRequest {
    pub key: String,
    pub action: &'static str,
}

/// Payload for the `add` action.
///
/// `runs` and `interval` configure drip-feed delivery; the panel defines
/// their joint semantics and expects them both or neither. When unset they
/// must be absent from the wire payload, not null or zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AddOrderRequest {
    pub key: String,
    pub action: &'static str,
    pub service: String,
    pub link: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

/// Payload for the `status` action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OrderStatusRequest {
    pub key: String,
    pub action: &'static str,
    pub order: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drip_feed_fields_absent_when_unset() {
        let request = AddOrderRequest {
            key: "k".to_string(),
            action: "add",
            service: "1".to_string(),
            link: "https://example.com/post".to_string(),
            quantity: 100,
            runs: None,
            interval: None,
        };

        let json = serde_json::to_value(&request).expect("serialize");
        let object = json.as_object().expect("object");
        assert!(!object.contains_key("runs"));
        assert!(!object.contains_key("interval"));
    }

    #[test]
    fn test_drip_feed_fields_present_when_set() {
        let request = AddOrderRequest {
            key: "k".to_string(),
            action: "add",
            service: "1".to_string(),
            link: "https://example.com/post".to_string(),
            quantity: 100,
            runs: Some(10),
            interval: Some(60),
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["runs"], 10);
        assert_eq!(json["interval"], 60);
    }
}
