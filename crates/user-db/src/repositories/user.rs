//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use user_core::entities::{NewUser, User};
use user_core::traits::{RepoResult, UserRepository};
use user_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_user(model: UserModel) -> RepoResult<User> {
    User::try_from(model)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, name, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, name, status, created_at, updated_at, deleted_at
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_user(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, name, status, created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(into_user).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id_including_deleted(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, name, status, created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(into_user).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, name, status, created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY id
            OFFSET $1
            LIMIT $2
            ",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(into_user).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE deleted_at IS NULL
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user), fields(id = %user.id))]
    async fn save(&self, user: &User) -> RepoResult<Option<User>> {
        // An explicit id does not advance the sequence; callers only save ids
        // that were handed out by `create`.
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (id, username, email, name, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                status = EXCLUDED.status,
                updated_at = NOW()
            WHERE users.deleted_at IS NULL
            RETURNING id, username, email, name, status, created_at, updated_at, deleted_at
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.status.as_str())
        .bind(user.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(into_user).transpose()
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
