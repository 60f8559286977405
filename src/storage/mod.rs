//! Storage module for configuration and output files.

pub mod config;
pub mod output;

pub use config::{AppConfig, ConfigError, OutputSettings};
pub use output::resolve_output;
