//! Workspace action and response types.

use std::convert::Infallible;
use std::str::FromStr;

use reqwest::StatusCode;

/// Lifecycle action to trigger on a workspace.
///
/// Verbs other than `apply` and `destroy` are kept as [`Action::Other`] and
/// forwarded unchanged; the workspace service decides whether they exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Provision the resources configured in the workspace.
    Apply,
    /// Tear down every resource in the workspace.
    Destroy,
    /// Any other verb, passed through literally.
    Other(String),
}

impl Action {
    /// The path segment sent to the workspace service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Apply => "apply",
            Self::Destroy => "destroy",
            Self::Other(verb) => verb,
        }
    }

    /// Check if this is one of the documented lifecycle actions.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Apply | Self::Destroy)
    }
}

impl FromStr for Action {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "apply" => Self::Apply,
            "destroy" => Self::Destroy,
            other => Self::Other(other.to_string()),
        })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw outcome of a workspace action request.
#[derive(Debug, Clone)]
pub struct DispatchResponse {
    /// HTTP status returned by the workspace service.
    pub status: StatusCode,
    /// Response body, unparsed.
    pub body: String,
}
