//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use user_core::error::ErrorCode;
use user_core::value_objects::UserId;

use crate::response::ApiError;

/// The `:id` segment of `/users/:id`, parsed as a positive integer
///
/// Anything else is rejected with `InvalidUserId` before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::code(ErrorCode::InvalidUserId))?;

        raw.parse::<UserId>()
            .map(UserIdPath)
            .map_err(|_| ApiError::code(ErrorCode::InvalidUserId))
    }
}
