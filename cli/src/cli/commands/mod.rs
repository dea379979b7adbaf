//! Command implementations.

pub mod trigger;

pub use trigger::handle_trigger;
