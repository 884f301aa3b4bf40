//! Domain errors - error types for the domain layer

mod status_error;
mod store_error;

pub use status_error::{ErrorCode, Language, StatusError};
pub use store_error::StoreError;
