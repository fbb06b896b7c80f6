use crate::application::dto::DashboardStatsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeSession;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Content and user totals.", body = DashboardStatsDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .admin_queries
        .dashboard(session.session())
        .await
        .into_http()
        .map(Json)
}
