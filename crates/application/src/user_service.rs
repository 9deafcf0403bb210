//! User lookup port and application service.
//!
//! Owns the read-only lookup operations over the user directory and the
//! distinction between "no such user" on an id lookup (a domain error) and
//! "nothing matched a general filter" (an empty success).

use std::sync::Arc;

use async_trait::async_trait;

use roster_core::{AppError, AppResult};
use roster_domain::{User, UserFilters, UserId};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for read-only user lookups.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds the user with the given id, if one exists.
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Returns all users matching the filter, ordered by id ascending and
    /// subject to the filter's limit/offset bounds.
    async fn find_users(&self, filters: UserFilters) -> AppResult<Vec<User>>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for user directory lookups.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Looks up a single user by exact id match.
    ///
    /// A missing row surfaces as a not-found error, never as an empty
    /// success. Every other repository error propagates unchanged.
    pub async fn find_user_by_id(&self, id: &UserId) -> AppResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{id}' not found")))
    }

    /// Returns all users matching the given filter combination.
    ///
    /// An empty list is a valid success when nothing matches.
    pub async fn find_users(&self, filters: UserFilters) -> AppResult<Vec<User>> {
        self.user_repository.find_users(filters).await
    }
}
