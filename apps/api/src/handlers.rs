use axum::Json;
use axum::extract::{Path, Query, State};
use roster_domain::{UserFilters, UserId};

use crate::dto::{HealthResponse, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Optional equality filters and pagination bounds for the user listing.
#[derive(Debug, serde::Deserialize)]
pub struct UserListQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let filters = UserFilters {
        id: query.id.map(UserId::new).transpose()?,
        name: query.name,
        surname: query.surname,
        email: query.email,
        active: query.active,
        limit: query.limit,
        offset: query.offset,
    };

    let users = state
        .user_service
        .find_users(filters)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .find_user_by_id(&UserId::new(user_id)?)
        .await?;

    Ok(Json(user.into()))
}
