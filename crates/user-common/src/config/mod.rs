//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, ConfigError, DatabaseConfig, LogConfig, LogFormat, ServerConfig,
    DEFAULT_CONFIG_PATH, ENV_PREFIX,
};
