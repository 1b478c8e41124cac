//! Process runtime: layered configuration, logging bootstrap and shutdown signals.
pub mod config;
pub mod logging;
pub mod paths;
pub mod shutdown;

pub use config::{default_logging_config, AppConfig, CliArgs, LoggingConfig, Section, ServerConfig};
