//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use user_core::error::StoreError;

/// Convert SQLx error to StoreError
pub fn map_db_error(e: SqlxError) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err
                .constraint()
                .map_or_else(|| db_err.message().to_string(), str::to_string);
            return StoreError::UniqueViolation(constraint);
        }
    }
    StoreError::Database(e.to_string())
}
