//! Error types and result aliases for schematics-trigger.
//!
//! Only local failures are errors here: building a request, reaching the
//! server, or reading a response body. A non-success HTTP status from either
//! endpoint is logged by the caller and is never turned into an error.

use thiserror::Error;

/// Main error type for schematics-trigger operations.
///
/// Every variant is fatal for the run. The top-level handler prints the
/// message and exits non-zero; nothing is retried.
#[derive(Error, Debug)]
pub enum TriggerError {
    /// The request could not be sent or the connection broke mid-flight.
    #[error("Network error: {0}. Check your internet connection.")]
    Network(String),

    /// The configured timeout elapsed before a response arrived.
    #[error("Request timed out. Raise SCHEMATICS_TIMEOUT_SECS or try again later.")]
    Timeout,

    /// The remote host refused or could not be reached.
    #[error("Could not connect to {0}. Check the endpoint and your network connection.")]
    Unreachable(String),

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    ResponseBody(String),

    /// A request URL could not be assembled.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A workspace id or action is a `.` or `..` path segment.
    #[error("'{0}' contains a '.' or '..' path segment, which cannot be sent without the URL being rewritten.")]
    DotSegment(String),

    /// The HTTP client could not be constructed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TriggerError {
    /// Checks if this error came from the transport rather than local setup.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::Unreachable(_) | Self::ResponseBody(_)
        )
    }
}

/// Result type alias using [`TriggerError`].
pub type Result<T> = std::result::Result<T, TriggerError>;

impl From<reqwest::Error> for TriggerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            let target = err
                .url()
                .map_or_else(|| "remote host".to_string(), ToString::to_string);
            Self::Unreachable(target)
        } else if err.is_body() || err.is_decode() {
            Self::ResponseBody(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<reqwest_middleware::Error> for TriggerError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Self::Network(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_point_at_remedy() {
        assert!(TriggerError::Timeout
            .to_string()
            .contains("SCHEMATICS_TIMEOUT_SECS"));

        let unreachable = TriggerError::Unreachable("https://iam.example".to_string());
        assert!(unreachable.to_string().contains("https://iam.example"));

        let dot = TriggerError::DotSegment("..".to_string());
        assert!(dot.to_string().contains("'..'"));
        assert!(!dot.is_transport());
    }

    #[test]
    fn is_transport_identifies_network_failures() {
        assert!(TriggerError::Timeout.is_transport());
        assert!(TriggerError::Network("reset".to_string()).is_transport());
        assert!(TriggerError::Unreachable("host".to_string()).is_transport());
        assert!(TriggerError::ResponseBody("eof".to_string()).is_transport());

        assert!(!TriggerError::Config("bad".to_string()).is_transport());
    }

    #[test]
    fn from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: TriggerError = url_err.into();
        assert!(matches!(err, TriggerError::InvalidUrl(_)));
    }

    #[test]
    fn from_middleware_error_unwraps_inner_message() {
        let err: TriggerError =
            reqwest_middleware::Error::Middleware(std::io::Error::other("hook failed").into())
                .into();
        assert!(matches!(err, TriggerError::Network(ref m) if m.contains("hook failed")));
    }
}
