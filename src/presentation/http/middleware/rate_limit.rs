// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Seconds between replenished login attempts per client IP.
const LOGIN_REPLENISH_SECS: u64 = 6;
const LOGIN_BURST: u32 = 5;

pub type LoginRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Shared limiter for the login endpoint. Clients are keyed by forwarding headers
/// first and the peer address second.
pub fn login_rate_limit_layer() -> LoginRateLimit {
    static RATE_LIMITER: OnceLock<LoginRateLimit> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(LOGIN_REPLENISH_SECS);
            builder.burst_size(LOGIN_BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
