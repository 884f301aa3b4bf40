//! Business logic services
//!
//! The controller owns the mapping from storage outcomes to the
//! user-visible error taxonomy.

pub mod context;
pub mod error;
pub mod user;

pub use context::ServiceContext;
pub use error::ServiceResult;
pub use user::UserController;
