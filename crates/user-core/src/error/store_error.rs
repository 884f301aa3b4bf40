//! Storage errors - what a repository adapter reports upward

use thiserror::Error;

/// Failure reported by a [`UserRepository`](crate::traits::UserRepository)
///
/// Adapters translate driver errors into this type so the service layer never
/// sees database-specific error values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    #[inline]
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::UniqueViolation("idx_users_email".to_string());
        assert_eq!(err.to_string(), "unique constraint violated: idx_users_email");
        assert!(err.is_unique_violation());

        let err = StoreError::database("connection reset");
        assert_eq!(err.to_string(), "database error: connection reset");
        assert!(!err.is_unique_violation());
    }
}
