/*
[INPUT]:  Service id, destination link, quantity, drip-feed tuning
[OUTPUT]: Order ids and per-order status mappings
[POS]:    HTTP layer - order placement and status endpoints
[UPDATE]: When the add/status actions or their response formats change
*/

use crate::http::{PanelClient, PanelError, Result};
use crate::types::{AddOrderRequest, AddOrderResponse, OrderStatusRequest, OrderStatusResponse};

/// Service id of the Reddit upvote offering on the panel
const REDDIT_UPVOTE_SERVICE: &str = "6228";

impl PanelClient {
    /// Place an order and return its id in decimal string form.
    ///
    /// `runs` and `interval` enable drip-feed delivery; the panel expects
    /// them together or not at all, and the client passes them through
    /// without validating that convention. When `None` they are omitted
    /// from the payload entirely.
    ///
    /// The panel returns the id as a JSON number; it is exposed as text to
    /// match how ids are sent back in the `status` action.
    pub async fn add_order(
        &self,
        service: &str,
        link: &str,
        quantity: u32,
        runs: Option<u32>,
        interval: Option<u32>,
    ) -> Result<String> {
        let body = AddOrderRequest {
            key: self.api_key().to_string(),
            action: "add",
            service: service.to_string(),
            link: link.to_string(),
            quantity,
            runs,
            interval,
        };

        let response: AddOrderResponse = self.send_json(&body).await?;

        // A missing or zero id means the panel rejected the order; the
        // rejection reason rides in an `error` field when present.
        if response.order == 0 {
            return match response.error {
                Some(message) => Err(PanelError::api(message)),
                None => Err(PanelError::InvalidResponse(
                    "response carries neither an order id nor an error".to_string(),
                )),
            };
        }

        Ok(response.order.to_string())
    }

    /// Query the status of one order.
    ///
    /// Always decodes the keyed-mapping response shape, so the result
    /// typically holds a single entry under `order_id`.
    pub async fn get_order_status(&self, order_id: &str) -> Result<OrderStatusResponse> {
        let body = OrderStatusRequest {
            key: self.api_key().to_string(),
            action: "status",
            order: order_id.to_string(),
        };
        self.send_json(&body).await
    }

    /// Place a Reddit upvote order, sparing callers the magic service id.
    /// No drip-feed.
    pub async fn reddit_upvote(&self, link: &str, quantity: u32) -> Result<String> {
        self.add_order(REDDIT_UPVOTE_SERVICE, link, quantity, None, None)
            .await
    }
}
