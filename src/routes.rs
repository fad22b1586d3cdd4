//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check (public, not rate limited)
//! - `/api/users*`  - User CRUD API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Optional per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - token bucket applied to `/api`; `None` disables limiting
pub fn app_router(state: AppState, rate_limit: Option<RateLimit>) -> NormalizePath<Router> {
    let mut api_router = api::routes::user_routes();
    if let Some(limit) = rate_limit {
        api_router = api_router.layer(rate_limit::layer(limit));
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
