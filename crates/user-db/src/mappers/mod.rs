//! Entity to model mappers
//!
//! Conversions between domain entities (user-core) and database models.

mod user;
