//! # user-db
//!
//! Database layer implementing the user repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation of the repository trait
//! defined in `user-core`. It handles:
//!
//! - Connection pool management
//! - The embedded `users` schema and its startup migration
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mapping
//!
//! ## Usage
//!
//! ```rust,ignore
//! use user_db::pool::{create_pool, DatabaseConfig};
//! use user_db::repositories::PgUserRepository;
//! use user_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::with_url("postgres://localhost/users");
//!     let pool = create_pool(&config).await?;
//!     user_db::run_migrations(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!
//!     let total = users.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::run_migrations;
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgUserRepository;
