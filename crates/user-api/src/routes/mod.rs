//! Route definitions
//!
//! User routes are mounted under /api/v1; health probes sit at the root.
//! Unknown paths get a `NotFound` error body.

use axum::{routing::get, Router};

use crate::handlers::{self, health, users};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(health_routes())
        .fallback(handlers::not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(user_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user_info)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
