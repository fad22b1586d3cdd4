//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// State shared by all request handlers.
///
/// The user store is passed in explicitly, so the same router runs against
/// PostgreSQL in production and an in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Builds the state around a user store.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
