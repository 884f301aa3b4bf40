//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{
    CreateUserRequest, ListUsersQuery, UpdateUserRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use responses::{
    HealthChecks, HealthResponse, ListUsersResponse, ReadinessResponse, UserEnvelope, UserResponse,
};
