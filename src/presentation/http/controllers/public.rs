// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::{ArticleDetailDto, CategoryPageDto, CategoryWithCountDto, HomeFeedDto, NewsSummaryDto},
    queries::public::{ArticleDetailQuery, CategoryPageQuery, SearchQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::header,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Public pages may be served stale for up to a minute.
pub const PUBLIC_CACHE_CONTROL: &str = "public, max-age=60";

type Cached<T> = ([(header::HeaderName, &'static str); 1], Json<T>);

fn cached<T>(body: T) -> Cached<T> {
    ([(header::CACHE_CONTROL, PUBLIC_CACHE_CONTROL)], Json(body))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive text to look for in titles and bodies.
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/feed",
    responses(
        (status = 200, description = "Lead story and latest published news.", body = HomeFeedDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn home_feed(Extension(state): Extension<HttpState>) -> HttpResult<Cached<HomeFeedDto>> {
    state
        .services
        .public_queries
        .home_feed()
        .await
        .into_http()
        .map(cached)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories ordered by name.", body = [CategoryWithCountDto])
    ),
    security(()),
    tag = "Public"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Cached<Vec<CategoryWithCountDto>>> {
    state
        .services
        .public_queries
        .list_categories()
        .await
        .into_http()
        .map(cached)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category with its published news.", body = CategoryPageDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn category_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Cached<CategoryPageDto>> {
    state
        .services
        .public_queries
        .category_page(CategoryPageQuery { slug })
        .await
        .into_http()
        .map(cached)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/{slug}",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "Published article with related stories.", body = ArticleDetailDto),
        (status = 404, description = "Unknown or unpublished article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Cached<ArticleDetailDto>> {
    state
        .services
        .public_queries
        .article_detail(ArticleDetailQuery { slug })
        .await
        .into_http()
        .map(cached)
}

#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching published news, newest first.", body = [NewsSummaryDto])
    ),
    security(()),
    tag = "Public"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Cached<Vec<NewsSummaryDto>>> {
    state
        .services
        .public_queries
        .search(SearchQuery {
            q: params.q.unwrap_or_default(),
        })
        .await
        .into_http()
        .map(cached)
}
