//! Configuration management for schematics-trigger.
//!
//! There is no configuration file. Defaults point at the public endpoints and
//! can be overridden through the environment variables listed in
//! [`settings::env`].

pub mod settings;

pub use settings::{env, ApiConfig, AppConfig, IamConfig};

/// Load configuration from the built-in defaults and the process environment.
#[must_use]
pub fn load_config() -> AppConfig {
    AppConfig::default().with_env_overrides()
}
