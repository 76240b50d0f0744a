/*
[INPUT]:  API key held by the client
[OUTPUT]: Account balance and currency
[POS]:    HTTP layer - account endpoint
[UPDATE]: When the balance action or its response format changes
*/

use crate::http::{PanelClient, Result};
use crate::types::{ActionRequest, UserBalanceResponse};

impl PanelClient {
    /// Fetch the account balance.
    ///
    /// Sends `{key, action: "balance"}`. The amount stays a string, as
    /// transmitted.
    pub async fn get_user_balance(&self) -> Result<UserBalanceResponse> {
        let body = ActionRequest {
            key: self.api_key().to_string(),
            action: "balance",
        };
        self.send_json(&body).await
    }
}
