// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, categories, dashboard, news, public},
    middleware::rate_limit::login_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Tests drive the router without a peer address, which the IP keyed
/// limiter needs, so they build it with `rate_limit = false`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let mut login = Router::new().route("/api/v1/auth/login", post(auth::login));
    if rate_limit {
        login = login.layer(login_rate_limit_layer());
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/feed", get(public::home_feed))
        .route("/api/v1/categories", get(public::list_categories))
        .route("/api/v1/categories/{slug}", get(public::category_page))
        .route("/api/v1/news/{slug}", get(public::article_detail))
        .route("/api/v1/search", get(public::search))
        .merge(login)
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/admin/dashboard", get(dashboard::dashboard))
        .route(
            "/api/v1/admin/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/admin/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/v1/admin/news",
            get(news::list_news).post(news::create_news),
        )
        .route(
            "/api/v1/admin/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&AppConfig::allowed_origins_from_env()))
        .layer(Extension(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
