//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use roster_application::UserRepository;
use roster_core::{AppError, AppResult};
use roster_domain::{User, UserFilters, UserId};

/// PostgreSQL implementation of the user repository port.
///
/// Every lookup runs inside its own transaction from the shared pool and
/// releases it on every exit path. This layer never writes to the users
/// table, so transactions are rolled back rather than committed.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    surname: String,
    email: String,
    active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

fn user_from_row(row: UserRow) -> AppResult<User> {
    Ok(User {
        id: UserId::new(row.id)?,
        name: row.name,
        surname: row.surname,
        email: row.email,
        active: row.active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

mod lookup;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.find_by_id_impl(id).await
    }

    async fn find_users(&self, filters: UserFilters) -> AppResult<Vec<User>> {
        self.find_users_impl(filters).await
    }
}
