//! User controller
//!
//! Thin façade over the repository. Every storage failure is logged here and
//! replaced by a status error; handlers never see a `StoreError`.

use std::sync::Arc;

use tracing::{info, instrument};

use user_core::entities::{NewUser, User};
use user_core::error::StatusError;
use user_core::traits::UserRepository;
use user_core::value_objects::UserId;

use super::error::{data_operation_failed, ServiceResult};

/// User controller
#[derive(Clone)]
pub struct UserController {
    repo: Arc<dyn UserRepository>,
}

impl UserController {
    /// Create a new UserController
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Insert a user and return it with id and timestamps filled in
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    pub async fn create_user(&self, new_user: NewUser) -> ServiceResult<User> {
        let user = self
            .repo
            .create(&new_user)
            .await
            .map_err(|e| data_operation_failed("create_user", e))?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Get a non-deleted user by ID
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: UserId) -> ServiceResult<User> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| data_operation_failed("get_user_by_id", e))?
            .ok_or_else(|| StatusError::user_not_found(id))
    }

    /// One page of users ordered by ID, plus the total number of users
    #[instrument(skip(self))]
    pub async fn list_users(&self, offset: i64, limit: i64) -> ServiceResult<(Vec<User>, i64)> {
        let users = self
            .repo
            .list(offset, limit)
            .await
            .map_err(|e| data_operation_failed("list_users", e))?;
        let total = self
            .repo
            .count()
            .await
            .map_err(|e| data_operation_failed("list_users", e))?;

        Ok((users, total))
    }

    /// Write the full record, inserting it if the ID is unknown
    ///
    /// A user deleted in the meantime is reported as not found.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn update_user(&self, user: User) -> ServiceResult<User> {
        let id = user.id;
        let user = self
            .repo
            .save(&user)
            .await
            .map_err(|e| data_operation_failed("update_user", e))?
            .ok_or_else(|| StatusError::user_not_found(id))?;

        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Soft delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        let affected = self
            .repo
            .soft_delete(id)
            .await
            .map_err(|e| data_operation_failed("delete_user", e))?;

        if affected == 0 {
            return Err(StatusError::user_not_found(id));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Storage reachability, for readiness probes
    pub async fn ping(&self) -> ServiceResult<()> {
        self.repo
            .ping()
            .await
            .map_err(|e| data_operation_failed("ping", e))
    }
}
