use roster_application::UserService;

/// Shared state injected into request handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}
