//! Per-IP rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Token bucket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds needed to replenish one token.
    pub per_second: u64,
    /// Maximum number of requests accepted in a burst.
    pub burst_size: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 100,
        }
    }
}

/// Creates a rate limiter keyed by the peer IP address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with `into_make_service_with_connect_info::<SocketAddr>` so
/// the peer address is available.
///
/// # Panics
///
/// Panics if either parameter is zero. [`crate::config::Config::validate`]
/// rejects such values at startup.
pub fn layer(
    limit: RateLimit,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(limit.per_second)
            .burst_size(limit.burst_size)
            .finish()
            .expect("rate limit parameters must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
