//! User entity - the single record type exposed by the service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::UserId;

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// All accepted status values, in their wire form
    pub const VALUES: [&'static str; 2] = ["active", "inactive"];

    /// Wire / column representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a status string is not one of the known values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user status: {0}")]
pub struct UserStatusParseError(pub String);

impl std::str::FromStr for UserStatus {
    type Err = UserStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UserStatusParseError(other.to_string())),
        }
    }
}

/// A persisted user
///
/// `deleted_at` is kept on the entity so unfiltered lookups can show
/// soft-deleted rows; it is never part of the public JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub name: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the user has been soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Replace the mutable fields with those of `changes`
    pub fn apply(&mut self, changes: NewUser) {
        self.username = changes.username;
        self.email = changes.email;
        self.name = changes.name;
        self.status = changes.status;
        self.updated_at = Utc::now();
    }
}

/// Fields supplied when creating a user; id and timestamps come from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub status: UserStatus,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            name: name.into(),
            status: UserStatus::default(),
        }
    }

    /// Override the default (active) status
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }
}
