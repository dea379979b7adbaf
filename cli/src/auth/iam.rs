//! API key exchange against the IAM token endpoint.

use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, info, warn};

use crate::auth::tokens::IamToken;
use crate::config::IamConfig;
use crate::error::{Result, TriggerError};

/// Exchange an API key for an access and refresh token.
///
/// A non-success status is logged and the body is still decoded, so a
/// rejected key yields an empty [`IamToken`] rather than an error.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body cannot be read.
pub async fn request_token(
    client: &ClientWithMiddleware,
    config: &IamConfig,
    api_key: &str,
) -> Result<IamToken> {
    let form = [
        ("grant_type", config.grant_type.as_str()),
        ("apikey", api_key),
    ];

    let response = client
        .post(config.token_url.clone())
        .header(http::header::ACCEPT, "application/json")
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    info!("IAM response: {status}");

    let body = response
        .text()
        .await
        .map_err(|e| TriggerError::ResponseBody(e.to_string()))?;

    if !status.is_success() {
        debug!("IAM error body: {body}");
    }

    let token = IamToken::from_body(&body);
    if token.has_access_token() {
        debug!(
            user_id = token.ims_user_id,
            expires_at = ?token.expires_at(),
            refresh_expires_at = ?token.refresh_expires_at(),
            scope = %token.scope,
            "IAM token issued"
        );
    } else {
        warn!("IAM returned no access token; the workspace request will likely be rejected");
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::build_http_client;
    use crate::config::ApiConfig;

    fn iam_config(server: &MockServer) -> IamConfig {
        IamConfig {
            token_url: Url::parse(&format!("{}/identity/token", server.uri())).unwrap(),
            ..IamConfig::default()
        }
    }

    #[tokio::test]
    async fn sends_form_encoded_api_key_grant() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(header("accept", "application/json"))
            .and(header("authorization", "Basic Yng6Yng="))
            .and(body_string(
                "grant_type=urn%3Aibm%3Aparams%3Aoauth%3Agrant-type%3Aapikey&apikey=my-api-key",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "A",
                "refresh_token": "B",
                "ims_user_id": 42,
                "token_type": "Bearer",
                "expires_in": 3600,
                "expiration": 1_700_003_600,
                "refresh_token_expiration": 1_702_592_000,
                "scope": "ibm openid"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_http_client(&ApiConfig::default()).unwrap();
        let token = request_token(&client, &iam_config(&server), "my-api-key")
            .await
            .unwrap();

        assert_eq!(token.access_token, "A");
        assert_eq!(token.refresh_token, "B");
        assert_eq!(token.ims_user_id, 42);
    }

    #[tokio::test]
    async fn rejected_key_yields_empty_tokens() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errorCode": "BXNIM0415E",
                "errorMessage": "Provided API key could not be found"
            })))
            .mount(&server)
            .await;

        let client = build_http_client(&ApiConfig::default()).unwrap();
        let token = request_token(&client, &iam_config(&server), "wrong")
            .await
            .unwrap();

        assert_eq!(token, IamToken::default());
    }

    #[tokio::test]
    async fn non_json_body_is_not_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = build_http_client(&ApiConfig::default()).unwrap();
        let token = request_token(&client, &iam_config(&server), "key").await;

        assert!(token.is_ok());
        assert!(!token.unwrap().has_access_token());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_fatal() {
        let config = IamConfig {
            token_url: Url::parse("http://127.0.0.1:1/identity/token").unwrap(),
            ..IamConfig::default()
        };

        let client = build_http_client(&ApiConfig::default()).unwrap();
        let result = request_token(&client, &config, "key").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().is_transport());
    }
}
