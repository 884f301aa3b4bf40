//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewUser, User};
use crate::error::StoreError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, StoreError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Find a non-deleted user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find a user by ID, soft-deleted rows included
    async fn find_by_id_including_deleted(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Page of non-deleted users ordered by ID
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<User>>;

    /// Number of non-deleted users
    async fn count(&self) -> RepoResult<i64>;

    /// Write every field of `user`, inserting the row if the ID is unknown
    ///
    /// Returns `None` without writing when the ID belongs to a soft-deleted row.
    async fn save(&self, user: &User) -> RepoResult<Option<User>>;

    /// Soft delete a user, returning the number of rows affected
    async fn soft_delete(&self, id: UserId) -> RepoResult<u64>;

    /// Cheap connectivity probe
    async fn ping(&self) -> RepoResult<()>;
}
