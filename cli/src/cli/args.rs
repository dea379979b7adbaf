//! Command-line argument parsing.

use clap::Parser;

use crate::client::Action;

/// Apply or destroy a remote Schematics workspace.
///
/// Exchanges the API key for IAM tokens, then asks the workspace service to
/// run the given action. The service response is printed as received; the
/// command does not wait for the action to finish.
///
/// Positionals are taken literally, including values that start with `-`.
/// Pass `--verbose` after them.
#[derive(Parser)]
#[command(name = "schematics-trigger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Cloud API key to exchange for IAM tokens.
    #[arg(allow_hyphen_values = true)]
    pub api_key: String,

    /// Id of the workspace to act on.
    #[arg(allow_hyphen_values = true)]
    pub workspace_id: String,

    /// Action to run: `apply` or `destroy`.
    ///
    /// Other values are forwarded to the service unchanged.
    #[arg(allow_hyphen_values = true)]
    pub action: Action,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("api_key", &"<redacted>")
            .field("workspace_id", &self.workspace_id)
            .field("action", &self.action)
            .field("verbose", &self.verbose)
            .finish()
    }
}
