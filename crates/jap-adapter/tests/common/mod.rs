/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for jap-adapter tests

use jap_adapter::{ClientConfig, PanelClient};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing.
///
/// Uses a dedicated (non-pooled) server so that dropping it actually shuts
/// down the listener; pooled servers from `MockServer::start()` keep the
/// port alive, which breaks tests that rely on the server being gone.
pub async fn setup_mock_server() -> MockServer {
    MockServer::builder().start().await
}

/// Panel client pointed at a mock server
pub fn client_against(server: &MockServer) -> PanelClient {
    PanelClient::with_config_and_endpoint(TEST_KEY, ClientConfig::default(), &server.uri())
        .expect("client init")
}
