//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as `{"error": <message>, "code": "<numeric code>"}`.
//! The HTTP status is not the error code's own status family: it comes from
//! [`STATUS_OVERRIDES`], falling back to 422.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use user_core::error::{ErrorCode, Language, StatusError};
use validator::ValidationErrors;

/// Status used for every code without an override
pub const DEFAULT_ERROR_STATUS: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

/// Per-code HTTP status overrides
pub const STATUS_OVERRIDES: &[(ErrorCode, u16)] = &[(ErrorCode::UserNotFound, 450)];

/// HTTP status a code is rendered with
pub fn http_status(code: ErrorCode) -> StatusCode {
    STATUS_OVERRIDES
        .iter()
        .find(|(c, _)| *c == code)
        .and_then(|&(_, status)| StatusCode::from_u16(status).ok())
        .unwrap_or(DEFAULT_ERROR_STATUS)
}

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Status(#[from] StatusError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

impl ApiError {
    /// Shorthand for a bare error code
    pub fn code(code: ErrorCode) -> Self {
        Self::Status(StatusError::new(code))
    }

    /// The status error this renders as
    pub fn status_error(&self) -> StatusError {
        match self {
            Self::Status(err) => err.clone(),
            Self::Validation(errors) => StatusError::bad_request(describe_validation(errors)),
        }
    }
}

/// Flatten field errors into `field: message; field: message`
fn describe_validation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string)
                })
                .collect();
            format!("{field}: {}", messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(err: &StatusError, lang: Language) -> Self {
        Self {
            error: err.localize(lang),
            code: err.code().code().to_string(),
        }
    }
}

/// Render a status error in `lang`
///
/// The error itself is kept in the response extensions so that the
/// localization middleware can re-render it for the caller's language.
pub fn render(err: StatusError, lang: Language) -> Response {
    let status = http_status(err.code());
    let body = ErrorBody::new(&err, lang);

    let mut response = (status, Json(body)).into_response();
    response.extensions_mut().insert(err);
    response
}

/// Render `err` with a transport-level status instead of the override table
pub fn render_with_status(status: StatusCode, err: StatusError) -> Response {
    let mut response = render(err, Language::default());
    *response.status_mut() = status;
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.status_error();

        // Log server-side failures
        if err.code().status() >= 500 {
            error!(code = err.code().key(), error = %err, "Request failed");
        }

        render(err, Language::default())
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
