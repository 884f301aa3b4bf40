//! Service layer error helpers

use tracing::error;
use user_core::error::{ErrorCode, StatusError, StoreError};

/// Result type for service operations
pub type ServiceResult<T> = Result<T, StatusError>;

/// Log a storage failure and hide it behind `DataOperationFailed`
pub(crate) fn data_operation_failed(operation: &'static str, err: StoreError) -> StatusError {
    error!(operation, error = %err, "User data operation failed");
    StatusError::new(ErrorCode::DataOperationFailed)
}
