//! # user-core
//!
//! Domain layer containing the user entity, value objects, the error taxonomy,
//! and the repository trait. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewUser, User, UserStatus, UserStatusParseError};
pub use error::{ErrorCode, Language, StatusError, StoreError};
pub use traits::{RepoResult, UserRepository};
pub use value_objects::{UserId, UserIdParseError};
