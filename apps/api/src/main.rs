//! Roster API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use roster_application::UserService;
use roster_core::AppError;
use roster_infrastructure::{PostgresUserRepository, connect_and_migrate};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let pool = connect_and_migrate(&config.database_url, config.database_max_connections).await?;

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let user_repository = Arc::new(PostgresUserRepository::new(pool));
    let app_state = AppState {
        user_service: UserService::new(user_repository),
    };

    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/users", get(handlers::list_users_handler))
        .route("/api/users/{user_id}", get(handlers::get_user_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "roster-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
