// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::{CategoryDto, CategoryWithCountDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeSession;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/categories",
    responses(
        (status = 200, description = "All categories with news counts, drafts included.", body = [CategoryWithCountDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
) -> HttpResult<Json<Vec<CategoryWithCountDto>>> {
    state
        .services
        .admin_queries
        .list_categories(session.session())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Created category with its generated slug.", body = CategoryDto),
        (status = 400, description = "Empty name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug contention, retry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(
            session.session(),
            CreateCategoryCommand { name: payload.name },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Updated category.", body = CategoryDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .update_category(
            session.session(),
            UpdateCategoryCommand {
                id,
                name: payload.name,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category removed.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Category still has news.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .category_commands
        .delete_category(session.session(), DeleteCategoryCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
