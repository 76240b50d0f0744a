/*
[INPUT]:  API key held by the client
[OUTPUT]: Catalog of orderable services
[POS]:    HTTP layer - service listing endpoint
[UPDATE]: When the services action or its response format changes
*/

use crate::http::{PanelClient, Result};
use crate::types::{ActionRequest, Service};

impl PanelClient {
    /// List the services available on the panel.
    ///
    /// Sends `{key, action: "services"}` and expects a JSON array of
    /// service records. If the panel answers with an error object instead
    /// of an array, that surfaces as a deserialization error.
    pub async fn list_services(&self) -> Result<Vec<Service>> {
        let body = ActionRequest {
            key: self.api_key().to_string(),
            action: "services",
        };
        self.send_json(&body).await
    }
}
