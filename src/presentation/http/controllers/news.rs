// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::{CreateNewsCommand, DeleteNewsCommand, UpdateNewsCommand},
    dto::{NewsDto, NewsSummaryDto},
    queries::admin::ListNewsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeSession;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AdminNewsParams {
    #[serde(default)]
    pub category_id: Option<i64>,
    /// `true` for published only, `false` for drafts only.
    #[serde(default)]
    pub published: Option<bool>,
}

/// Body for both create and full update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewsRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/news",
    params(AdminNewsParams),
    responses(
        (status = 200, description = "News including drafts, newest first.", body = [NewsSummaryDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Query(params): Query<AdminNewsParams>,
) -> HttpResult<Json<Vec<NewsSummaryDto>>> {
    state
        .services
        .admin_queries
        .list_news(
            session.session(),
            ListNewsQuery {
                category_id: params.category_id,
                published: params.published,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/news/{id}",
    params(("id" = i64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News item, published or not.", body = NewsDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<NewsDto>> {
    state
        .services
        .admin_queries
        .get_news(session.session(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/news",
    request_body = NewsRequest,
    responses(
        (status = 200, description = "Created news with its generated slug.", body = NewsDto),
        (status = 400, description = "Invalid fields or unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug contention, retry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Json(payload): Json<NewsRequest>,
) -> HttpResult<Json<NewsDto>> {
    let command = CreateNewsCommand {
        title: payload.title,
        content: payload.content,
        category_id: payload.category_id,
        cover_image: payload.cover_image,
        published: payload.published,
    };

    state
        .services
        .news_commands
        .create_news(session.session(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/news/{id}",
    params(("id" = i64, Path, description = "News identifier")),
    request_body = NewsRequest,
    responses(
        (status = 200, description = "Updated news.", body = NewsDto),
        (status = 400, description = "Invalid fields or unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Path(id): Path<i64>,
    Json(payload): Json<NewsRequest>,
) -> HttpResult<Json<NewsDto>> {
    let command = UpdateNewsCommand {
        id,
        title: payload.title,
        content: payload.content,
        category_id: payload.category_id,
        cover_image: payload.cover_image,
        published: payload.published,
    };

    state
        .services
        .news_commands
        .update_news(session.session(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/news/{id}",
    params(("id" = i64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News removed.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .news_commands
        .delete_news(session.session(), DeleteNewsCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
