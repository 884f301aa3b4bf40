//! Route handlers

pub mod health;
pub mod users;


use axum::{http::StatusCode, response::Response};
use user_core::error::{ErrorCode, StatusError};

use crate::response::render_with_status;

/// Fallback for paths no route matches
pub async fn not_found() -> Response {
    render_with_status(StatusCode::NOT_FOUND, StatusError::new(ErrorCode::NotFound))
}
