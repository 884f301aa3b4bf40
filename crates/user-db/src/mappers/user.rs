//! User entity <-> model mapper

use user_core::entities::{User, UserStatus};
use user_core::error::StoreError;
use user_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert a UserModel row into a User entity
///
/// Fails only if the status column holds a value the CHECK constraint
/// should have rejected.
impl TryFrom<UserModel> for User {
    type Error = StoreError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<UserStatus>()
            .map_err(|e| StoreError::database(format!("row {}: {e}", model.id)))?;

        Ok(User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            name: model.name,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}
