//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; query strings are kept as
//! raw strings so that bad values can fall back to defaults instead of
//! rejecting the request.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use user_core::entities::{NewUser, UserStatus};
use user_core::error::StatusError;

/// First page number
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when none (or an invalid one) is given
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: i64 = 100;

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// `active` or `inactive`; missing, null, or empty means `active`
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

/// Update user request - the full record, same rules as creation
pub type UpdateUserRequest = CreateUserRequest;

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.is_empty() || status.parse::<UserStatus>().is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("status");
    err.message = Some("Status must be one of: active, inactive".into());
    Err(err)
}

impl CreateUserRequest {
    /// Convert a validated request into the fields to persist
    pub fn into_new_user(self) -> Result<NewUser, StatusError> {
        let status = if self.status.is_empty() {
            UserStatus::default()
        } else {
            self.status
                .parse::<UserStatus>()
                .map_err(|e| StatusError::bad_request(e.to_string()))?
        };

        Ok(NewUser::new(self.username, self.email, self.name).with_status(status))
    }
}

/// Query string of the list endpoint
///
/// Missing, unparsable, or out-of-range values silently become the defaults.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListUsersQuery {
    /// Build from decoded query pairs; the first value of a repeated key wins
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "page_size" => &mut query.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// 1-based page number
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|&page| page > 0)
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Rows to skip; saturates instead of overflowing on huge page numbers
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.page_size())
    }
}
