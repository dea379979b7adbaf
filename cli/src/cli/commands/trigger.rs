//! Workspace action command handler.
//!
//! A run is strictly linear: exchange the API key for tokens, send the
//! action request, log what came back. Any error ends the run; there are no
//! retries and no polling for the action to complete.

use tracing::{info, info_span, warn, Instrument};

use crate::auth::request_token;
use crate::client::{
    build_http_client, workspace_action_url, Action, DispatchResponse, SchematicsClient,
};
use crate::config::AppConfig;
use crate::error::Result;

/// Handle a `schematics-trigger <api-key> <workspace-id> <action>` invocation.
///
/// Returns the raw workspace service response after logging it. A
/// non-success status from either endpoint does not fail the run.
///
/// # Errors
///
/// Returns an error if the workspace id or action holds a `.`/`..` path
/// segment, or if either request cannot be sent or its body cannot be read.
pub async fn handle_trigger(
    api_key: &str,
    workspace_id: &str,
    action: &Action,
    config: &AppConfig,
) -> Result<DispatchResponse> {
    if !action.is_known() {
        warn!("'{action}' is not apply or destroy; forwarding it unchanged");
    }

    // Refuse ids the URL parser would rewrite before any request goes out
    workspace_action_url(&config.api.base_url, workspace_id, action)?;

    let http_client = build_http_client(&config.api)?;

    let token = request_token(&http_client, &config.iam, api_key)
        .instrument(info_span!("token_exchange"))
        .await?;

    let client = SchematicsClient::new(http_client, &config.api);
    let response = client
        .dispatch(workspace_id, action, &token)
        .instrument(info_span!("action_dispatch", workspace = workspace_id, %action))
        .await?;

    info!("Schematics response: {}", response.status);
    info!("{}", response.body);

    Ok(response)
}
