//! Authentication module for schematics-trigger.
//!
//! Exchanges an API key for a short-lived IAM access token and refresh token.
//! Tokens live only for the current run and are never stored.

pub mod iam;
pub mod tokens;

pub use iam::request_token;
pub use tokens::IamToken;
