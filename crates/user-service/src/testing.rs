//! In-memory repository for tests
//!
//! Mirrors the PostgreSQL adapter closely enough for handler and controller
//! tests: ids come from a sequence, username and email are unique among
//! non-deleted rows, and deletes are soft.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use user_core::entities::{NewUser, User};
use user_core::error::StoreError;
use user_core::traits::{RepoResult, UserRepository};
use user_core::value_objects::UserId;

#[derive(Default)]
struct State {
    last_id: i64,
    rows: BTreeMap<i64, User>,
    failure: Option<StoreError>,
}

impl State {
    fn check_unique(&self, id: Option<UserId>, username: &str, email: &str) -> RepoResult<()> {
        for row in self.rows.values() {
            if row.is_deleted() || Some(row.id) == id {
                continue;
            }
            if row.username == username {
                return Err(StoreError::UniqueViolation("idx_users_username".to_string()));
            }
            if row.email == email {
                return Err(StoreError::UniqueViolation("idx_users_email".to_string()));
            }
        }
        Ok(())
    }
}

/// `UserRepository` backed by a map
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `err`
    pub fn fail_with(&self, err: StoreError) {
        self.lock().failure = Some(err);
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enter(&self) -> RepoResult<MutexGuard<'_, State>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.lock();
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut state = self.enter()?;
        state.check_unique(None, &user.username, &user.email)?;

        state.last_id += 1;
        let id = state.last_id;
        let now = Utc::now();
        let row = User {
            id: UserId::new(id),
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            status: user.status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let state = self.enter()?;
        Ok(state
            .rows
            .get(&id.into_inner())
            .filter(|u| !u.is_deleted())
            .cloned())
    }

    async fn find_by_id_including_deleted(&self, id: UserId) -> RepoResult<Option<User>> {
        let state = self.enter()?;
        Ok(state.rows.get(&id.into_inner()).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<User>> {
        let state = self.enter()?;
        let skip = usize::try_from(offset).unwrap_or(0);
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(state
            .rows
            .values()
            .filter(|u| !u.is_deleted())
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepoResult<i64> {
        let state = self.enter()?;
        let live = state.rows.values().filter(|u| !u.is_deleted()).count();
        Ok(i64::try_from(live).unwrap_or(i64::MAX))
    }

    async fn save(&self, user: &User) -> RepoResult<Option<User>> {
        let mut state = self.enter()?;
        state.check_unique(Some(user.id), &user.username, &user.email)?;

        let key = user.id.into_inner();
        let now = Utc::now();
        let row = match state.rows.get(&key) {
            Some(existing) if existing.is_deleted() => return Ok(None),
            Some(existing) => User {
                created_at: existing.created_at,
                deleted_at: existing.deleted_at,
                updated_at: now,
                ..user.clone()
            },
            None => User {
                updated_at: now,
                ..user.clone()
            },
        };
        state.rows.insert(key, row.clone());
        Ok(Some(row))
    }

    async fn soft_delete(&self, id: UserId) -> RepoResult<u64> {
        let mut state = self.enter()?;
        match state.rows.get_mut(&id.into_inner()) {
            Some(row) if !row.is_deleted() => {
                row.deleted_at = Some(Utc::now());
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn ping(&self) -> RepoResult<()> {
        self.enter().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(&NewUser::new("alice", "a@example.com", "A")).await.unwrap();
        repo.soft_delete(a.id).await.unwrap();
        let b = repo.create(&NewUser::new("alice", "a@example.com", "A")).await.unwrap();
        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_unique_among_live_rows() {
        let repo = InMemoryUserRepository::new();
        repo.create(&NewUser::new("alice", "a@example.com", "A")).await.unwrap();
        let err = repo
            .create(&NewUser::new("other", "a@example.com", "B"))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let repo = InMemoryUserRepository::new();
        repo.fail_with(StoreError::database("down"));
        assert!(repo.ping().await.is_err());
        assert_eq!(repo.calls(), 1);
    }
}
