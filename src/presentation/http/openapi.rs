// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::extractors::SESSION_COOKIE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::public::home_feed,
        crate::presentation::http::controllers::public::list_categories,
        crate::presentation::http::controllers::public::category_page,
        crate::presentation::http::controllers::public::article_detail,
        crate::presentation::http::controllers::public::search,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::dashboard::dashboard,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::get_news,
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::update_news,
        crate::presentation::http::controllers::news::delete_news,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::public::SearchParams,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::news::NewsRequest,
            crate::presentation::http::controllers::news::AdminNewsParams,
            crate::application::dto::LoginResponse,
            crate::application::dto::PrincipalDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::CategoryWithCountDto,
            crate::application::dto::NewsDto,
            crate::application::dto::NewsSummaryDto,
            crate::application::dto::HomeFeedDto,
            crate::application::dto::CategoryPageDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::DashboardStatsDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Public", description = "Reader-facing, published content only"),
        (name = "Auth", description = "Session endpoints"),
        (name = "Admin", description = "Back-office endpoints, ADMIN role required"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    info(
        title = "Medee API",
        description = "Mongolian news site backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("opaque".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

/// Swagger UI at `/docs`, ReDoc at `/redoc`, the raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}
