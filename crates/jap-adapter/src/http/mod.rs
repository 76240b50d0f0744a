/*
[INPUT]:  HTTP client configuration and panel actions
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new actions or changing client behavior
*/

pub mod account;
pub mod catalog;
pub mod client;
pub mod error;
pub mod order;

pub use error::{PanelError, Result};

pub use client::{ClientConfig, PanelClient};
