//! Construction of the HTTP client shared by both requests.

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::client::middleware::RequestLogMiddleware;
use crate::config::ApiConfig;
use crate::error::{Result, TriggerError};

/// Build the HTTP client used for the token exchange and the dispatch.
///
/// No timeout is applied unless one is configured.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be built.
pub fn build_http_client(config: &ApiConfig) -> Result<ClientWithMiddleware> {
    let mut builder =
        Client::builder().user_agent(format!("schematics-trigger/{}", env!("CARGO_PKG_VERSION")));

    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    let inner_client = builder
        .build()
        .map_err(|e| TriggerError::Config(format!("Cannot build HTTP client: {e}")))?;

    Ok(ClientBuilder::new(inner_client)
        .with(RequestLogMiddleware)
        .build())
}
