//! CLI module for schematics-trigger.

pub mod args;
pub mod commands;

pub use args::Cli;
