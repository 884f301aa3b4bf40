//! User ID - positive 64-bit database identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primary key of a user row
///
/// Always positive once assigned by the database. Parsing from text only
/// accepts base-10 integers greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw i64 value without validation
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse a path segment or query value into a UserId
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        let id = s
            .parse::<i64>()
            .map_err(|_| UserIdParseError::InvalidFormat)?;
        if id <= 0 {
            return Err(UserIdParseError::NotPositive(id));
        }
        Ok(Self(id))
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,

    #[error("user id must be positive, got {0}")]
    NotPositive(i64),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

// JSON clients see a plain number
impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(UserId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(UserId::parse("42").unwrap(), UserId::new(42));
        assert_eq!("9223372036854775807".parse::<UserId>().unwrap().into_inner(), i64::MAX);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(UserId::parse("0"), Err(UserIdParseError::NotPositive(0)));
        assert_eq!(UserId::parse("-1"), Err(UserIdParseError::NotPositive(-1)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "1.5", " 7", "12abc", "9223372036854775808"] {
            assert_eq!(
                UserId::parse(input),
                Err(UserIdParseError::InvalidFormat),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(id, UserId::new(7));
    }
}
