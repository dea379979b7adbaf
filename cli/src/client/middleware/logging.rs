//! Request logging middleware.

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Middleware that logs each target endpoint and the status it answered with.
///
/// Only the method and URL are logged. Headers and bodies carry credentials
/// and are left alone.
pub struct RequestLogMiddleware;

#[async_trait]
impl Middleware for RequestLogMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        tracing::info!("Endpoint to target: {method} {url}");

        let response = next.run(req, extensions).await;

        match &response {
            Ok(resp) => tracing::debug!("{method} {url} answered {}", resp.status()),
            Err(e) => tracing::error!("{method} {url} failed: {e}"),
        }

        response
    }
}
