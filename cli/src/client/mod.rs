//! HTTP plumbing and the workspace service client.

pub mod api;
pub mod middleware;
pub mod transport;
pub mod types;

pub use api::{workspace_action_url, SchematicsClient};
pub use transport::build_http_client;
pub use types::{Action, DispatchResponse};
