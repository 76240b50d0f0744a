/*
[INPUT]:  HTTP configuration (endpoint, timeouts, API key)
[OUTPUT]: Configured panel client and the shared POST helper
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{PanelError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Production endpoint of the JustAnotherPanel API
const PANEL_ENDPOINT: &str = "https://justanotherpanel.com/api/v2";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the JustAnotherPanel API.
///
/// Holds the API key and the fixed endpoint; immutable after construction.
/// All operations serialize a request body, POST it to the single endpoint
/// and decode the JSON response. Safe to share across tasks.
#[derive(Debug, Clone)]
pub struct PanelClient {
    http_client: Client,
    endpoint: Url,
    api_key: String,
}

impl PanelClient {
    /// Create a client bound to the production endpoint with default
    /// configuration.
    ///
    /// The key format is not validated here; an invalid key only surfaces
    /// as an error payload in the responses.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom timeouts
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_endpoint(api_key, config, PANEL_ENDPOINT)
    }

    /// Create a client against an alternate endpoint (mock servers, panels
    /// running the same API under a different domain)
    pub fn with_config_and_endpoint(
        api_key: impl Into<String>,
        config: ClientConfig,
        endpoint: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }

    /// API key this client was constructed with
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// POST `body` as JSON to the panel endpoint and return the raw
    /// response bytes.
    ///
    /// The status code is deliberately not inspected: the panel reports
    /// application errors inside the JSON body, so error payloads must
    /// flow through the same decode path as success payloads.
    pub(crate) async fn post<B: Serialize>(&self, body: &B) -> Result<Vec<u8>> {
        let payload = serde_json::to_vec(body)?;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%status, len = bytes.len(), "panel response received");

        Ok(bytes.to_vec())
    }

    /// POST `body` and decode the response into `T`
    pub(crate) async fn send_json<B, T>(&self, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let bytes = self.post(body).await?;
        serde_json::from_slice(&bytes).map_err(PanelError::from)
    }
}
