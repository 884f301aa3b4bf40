//! Middleware stack for the API server
//!
//! Request ID generation, request tracing, timeouts, and localization of
//! error bodies. Timed-out requests get the same `{error, code}` body as
//! handler failures.

use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::{self as axum_middleware, Next},
    response::Response,
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, warn, Level};
use user_core::error::{ErrorCode, Language, StatusError};

use crate::response::{render, render_with_status};
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply middleware stack to the router
pub fn apply_middleware(router: Router<AppState>, request_timeout: Duration) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(axum_middleware::from_fn(localize_errors))
            // Timeout (503 Service Unavailable)
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

/// Turn a failure of the timeout layer into an error response
pub async fn handle_middleware_error(err: BoxError) -> Response {
    let status_error = StatusError::new(ErrorCode::StatusBadGateway);

    if err.is::<Elapsed>() {
        warn!("Request timed out");
        render_with_status(StatusCode::SERVICE_UNAVAILABLE, status_error)
    } else {
        error!(error = %err, "Unhandled middleware error");
        render_with_status(StatusCode::INTERNAL_SERVER_ERROR, status_error)
    }
}

/// Language requested through `Accept-Language`, English when absent
pub fn request_language(headers: &HeaderMap) -> Language {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Re-render error bodies in the caller's language
///
/// Errors are rendered in English by default and carry their `StatusError`
/// in the response extensions; anything else passes through untouched.
pub async fn localize_errors(request: Request, next: Next) -> Response {
    let lang = request_language(request.headers());
    let response = next.run(request).await;

    if lang == Language::default() {
        return response;
    }

    let Some(err) = response.extensions().get::<StatusError>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let (_, body) = render(err, lang).into_parts();
    Response::from_parts(parts, body)
}
