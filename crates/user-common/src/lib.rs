//! # user-common
//!
//! Shared utilities including configuration, process-level error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, LogConfig, LogFormat, ServerConfig,
    DEFAULT_CONFIG_PATH,
};
pub use error::AppError;
pub use telemetry::{
    try_init_tracing_with_config, TracingConfig, TracingError,
};
