//! User records and lookup filters.

use chrono::{DateTime, Utc};
use roster_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user record.
///
/// Stored as an opaque string primary key; must not be empty or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "user id must not be empty".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Immutable snapshot of a user row.
///
/// Created only by the underlying storage system; this layer never mutates
/// it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Email address as stored.
    pub email: String,
    /// Whether the account is active.
    pub active: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Optional equality constraints and pagination bounds for user lookups.
///
/// An absent field places no constraint on the corresponding column; an
/// absent bound leaves the result set unlimited on that side. Constructed by
/// the caller and consumed by a single query.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    /// Exact id match.
    pub id: Option<UserId>,
    /// Exact given-name match.
    pub name: Option<String>,
    /// Exact family-name match.
    pub surname: Option<String>,
    /// Exact email match.
    pub email: Option<String>,
    /// Exact active-flag match.
    pub active: Option<bool>,
    /// Maximum number of rows to return.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: Option<u32>,
}

impl UserFilters {
    /// Creates a filter constraining only the id column.
    #[must_use]
    pub fn by_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UserFilters, UserId};

    #[test]
    fn user_id_rejects_empty_input() {
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn user_id_rejects_whitespace_input() {
        assert!(UserId::new("   ").is_err());
    }

    #[test]
    fn user_id_preserves_the_given_value() {
        let id = UserId::new("u1");
        assert!(id.is_ok());
        assert_eq!(id.unwrap_or_else(|_| unreachable!()).as_str(), "u1");
    }

    #[test]
    fn default_filters_place_no_constraints() {
        let filters = UserFilters::default();
        assert!(filters.id.is_none());
        assert!(filters.name.is_none());
        assert!(filters.surname.is_none());
        assert!(filters.email.is_none());
        assert!(filters.active.is_none());
        assert!(filters.limit.is_none());
        assert!(filters.offset.is_none());
    }

    #[test]
    fn by_id_constrains_only_the_id_column() {
        let Ok(id) = UserId::new("u1") else {
            unreachable!()
        };
        let filters = UserFilters::by_id(id.clone());
        assert_eq!(filters.id, Some(id));
        assert!(filters.name.is_none());
        assert!(filters.active.is_none());
        assert!(filters.limit.is_none());
    }
}
