use sqlx::{PgConnection, Postgres, QueryBuilder};

use super::*;

impl PostgresUserRepository {
    pub(super) async fn find_by_id_impl(&self, id: &UserId) -> AppResult<Option<User>> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to begin user lookup transaction: {error}"))
        })?;

        // Dropping the transaction on the error path rolls it back.
        let users = find_users_in(&mut transaction, UserFilters::by_id(id.clone())).await?;

        release(transaction).await?;

        Ok(users.into_iter().next())
    }

    pub(super) async fn find_users_impl(&self, filters: UserFilters) -> AppResult<Vec<User>> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to begin user lookup transaction: {error}"))
        })?;

        let users = find_users_in(&mut transaction, filters).await?;

        release(transaction).await?;

        Ok(users)
    }
}

/// Releases a read-only lookup transaction. Never commits.
async fn release(transaction: sqlx::Transaction<'static, Postgres>) -> AppResult<()> {
    transaction.rollback().await.map_err(|error| {
        AppError::Internal(format!("failed to release user lookup transaction: {error}"))
    })
}

async fn find_users_in(
    connection: &mut PgConnection,
    filters: UserFilters,
) -> AppResult<Vec<User>> {
    let mut query = build_find_users_query(&filters);

    let rows = query
        .build_query_as::<UserRow>()
        .fetch_all(connection)
        .await
        .map_err(|error| AppError::Internal(format!("failed to query users: {error}")))?;

    rows.into_iter().map(user_from_row).collect()
}

/// Builds the filtered user query.
///
/// Each present filter field contributes exactly one equality clause, ANDed
/// onto the always-true base in the fixed column order id, name, surname,
/// email, active. All values travel as bound parameters.
pub(super) fn build_find_users_query(filters: &UserFilters) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(
        "SELECT id, name, surname, email, active, created_at, updated_at FROM users WHERE 1=1",
    );

    if let Some(id) = &filters.id {
        builder.push(" AND id = ");
        builder.push_bind(id.as_str().to_owned());
    }

    if let Some(name) = &filters.name {
        builder.push(" AND name = ");
        builder.push_bind(name.clone());
    }

    if let Some(surname) = &filters.surname {
        builder.push(" AND surname = ");
        builder.push_bind(surname.clone());
    }

    if let Some(email) = &filters.email {
        builder.push(" AND email = ");
        builder.push_bind(email.clone());
    }

    if let Some(active) = filters.active {
        builder.push(" AND active = ");
        builder.push_bind(active);
    }

    builder.push(" ORDER BY id ASC");
    push_limit_offset(&mut builder, filters.limit, filters.offset);

    builder
}

/// Appends the pagination clause. Absent bounds contribute nothing.
fn push_limit_offset(
    builder: &mut QueryBuilder<'static, Postgres>,
    limit: Option<u32>,
    offset: Option<u32>,
) {
    if let Some(limit) = limit {
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
    }

    if let Some(offset) = offset {
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));
    }
}
