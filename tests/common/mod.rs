#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use user_api::api::middleware::rate_limit::RateLimit;
use user_api::domain::entities::{NewUser, User, UserChanges};
use user_api::domain::repositories::UserRepository;
use user_api::error::StoreError;
use user_api::infrastructure::persistence::InMemoryUserRepository;
use user_api::routes::app_router;
use user_api::state::AppState;

/// A store whose every call fails, as if the database were down.
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Unavailable("database is down".to_string())
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn insert(&self, _new_user: NewUser) -> Result<User, StoreError> {
        Err(down())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Err(down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(down())
    }

    async fn update(&self, _id: i64, _changes: UserChanges) -> Result<Option<User>, StoreError> {
        Err(down())
    }

    async fn remove(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

pub fn create_test_state(repository: Arc<dyn UserRepository>) -> AppState {
    AppState::new(repository)
}

/// Test server over the full application router, without rate limiting.
pub fn make_server_with(repository: Arc<dyn UserRepository>) -> TestServer {
    let app = app_router(create_test_state(repository), None);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Test server backed by an empty in-memory store.
pub fn make_server() -> TestServer {
    make_server_with(Arc::new(InMemoryUserRepository::new()))
}

/// Test server backed by a store that always fails.
pub fn make_failing_server() -> TestServer {
    make_server_with(Arc::new(FailingStore))
}

/// Test server listening on a real socket, so the rate limiter sees the peer address.
pub fn make_rate_limited_server(limit: RateLimit) -> TestServer {
    let app = app_router(
        create_test_state(Arc::new(InMemoryUserRepository::new())),
        Some(limit),
    );
    let make_service = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

    TestServer::builder()
        .http_transport()
        .build(make_service)
        .unwrap()
}
