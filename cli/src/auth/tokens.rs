//! Token types for the IAM exchange.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Token set returned by the IAM token endpoint.
///
/// Every field defaults when absent so an error body still decodes.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IamToken {
    /// The access token, sent verbatim as `Authorization`.
    pub access_token: String,
    /// The refresh token, sent as `Refresh_token`.
    pub refresh_token: String,
    /// Numeric IMS user id of the key owner.
    pub ims_user_id: i64,
    /// Token type (usually "Bearer").
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Access token expiry as seconds since the Unix epoch.
    pub expiration: i64,
    /// Refresh token expiry as seconds since the Unix epoch.
    pub refresh_token_expiration: i64,
    /// Granted scope.
    pub scope: String,
}

impl IamToken {
    /// Decode a token endpoint response body.
    ///
    /// Decoding never fails: a body that is not a token object yields an
    /// empty token set and a warning.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("IAM response could not be decoded, continuing with empty tokens: {e}");
                Self::default()
            }
        }
    }

    /// Check if an access token was issued.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// When the access token expires, if the endpoint reported it.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.expiration)
    }

    /// When the refresh token expires, if the endpoint reported it.
    #[must_use]
    pub fn refresh_expires_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.refresh_token_expiration)
    }
}

fn epoch_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

impl std::fmt::Debug for IamToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(token: &str) -> &'static str {
            if token.is_empty() {
                "<empty>"
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("IamToken")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("ims_user_id", &self.ims_user_id)
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("expiration", &self.expiration)
            .field("refresh_token_expiration", &self.refresh_token_expiration)
            .field("scope", &self.scope)
            .finish()
    }
}
