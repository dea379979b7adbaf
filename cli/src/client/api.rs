//! Workspace service client implementation.

use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use url::Url;

use crate::auth::IamToken;
use crate::client::types::{Action, DispatchResponse};
use crate::config::ApiConfig;
use crate::error::{Result, TriggerError};

/// Header carrying the refresh token on workspace requests.
pub const REFRESH_TOKEN_HEADER: &str = "Refresh_token";

/// Build the URL for a workspace action.
///
/// The workspace id and verb are concatenated as given, so the result is
/// always `<base>/v1/workspaces/<workspace_id>/<action>`.
///
/// # Errors
///
/// Returns [`TriggerError::DotSegment`] if either value holds a `.` or `..`
/// segment, which URL parsing would resolve away even when percent-encoded,
/// or an error if the concatenated string is not a valid URL.
pub fn workspace_action_url(base: &Url, workspace_id: &str, action: &Action) -> Result<Url> {
    for value in [workspace_id, action.as_str()] {
        if value.split(['/', '\\']).any(is_dot_segment) {
            return Err(TriggerError::DotSegment(value.to_string()));
        }
    }

    let base = base.as_str().trim_end_matches('/');
    let url = Url::parse(&format!("{base}/v1/workspaces/{workspace_id}/{action}"))?;
    Ok(url)
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | "%2e" | ".." | ".%2e" | "%2e." | "%2e%2e"
    )
}

/// Client for triggering lifecycle actions on workspaces.
pub struct SchematicsClient {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl SchematicsClient {
    /// Create a new workspace client on top of a shared HTTP client.
    #[must_use]
    pub fn new(client: ClientWithMiddleware, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Prepare the `PUT` request for an action without sending it.
    ///
    /// The access token goes into `Authorization` exactly as issued, with no
    /// scheme prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the action URL cannot be built.
    pub fn action_request(
        &self,
        workspace_id: &str,
        action: &Action,
        token: &IamToken,
    ) -> Result<RequestBuilder> {
        let url = workspace_action_url(&self.base_url, workspace_id, action)?;

        Ok(self
            .client
            .put(url)
            .header(http::header::AUTHORIZATION, token.access_token.as_str())
            .header(REFRESH_TOKEN_HEADER, token.refresh_token.as_str()))
    }

    /// Trigger an action on a workspace and return the raw response.
    ///
    /// The outcome of the remote action is not interpreted: any status the
    /// service answers with is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be read.
    pub async fn dispatch(
        &self,
        workspace_id: &str,
        action: &Action,
        token: &IamToken,
    ) -> Result<DispatchResponse> {
        let response = self
            .action_request(workspace_id, action, token)?
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TriggerError::ResponseBody(e.to_string()))?;

        Ok(DispatchResponse { status, body })
    }
}
