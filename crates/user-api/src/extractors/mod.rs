//! Axum extractors for request handling
//!
//! Custom extractors for body validation, the user id path segment, and
//! list pagination.

mod pagination;
mod path;
mod validated;

pub use pagination::PageQuery;
pub use path::UserIdPath;
pub use validated::ValidatedJson;
