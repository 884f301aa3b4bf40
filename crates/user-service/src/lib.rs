//! # user-service
//!
//! Application layer: the user controller that fronts the repository, and
//! the request/response DTOs used by the HTTP layer.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use services::{ServiceContext, ServiceResult, UserController};
