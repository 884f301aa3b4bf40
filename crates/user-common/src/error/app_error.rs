//! Application error types
//!
//! Failures of the process itself (startup, configuration, serving). Request
//! failures use `user_core::StatusError` instead.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Failed to bind to {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    pub fn migration(err: impl std::fmt::Display) -> Self {
        Self::Migration(err.to_string())
    }

    /// Process exit code for this failure
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::Database(_) | Self::Migration(_) => 69,
            Self::Bind { .. } | Self::Server(_) => 1,
        }
    }
}
