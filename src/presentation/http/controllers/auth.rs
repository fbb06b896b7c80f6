// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::LoginCommand,
    dto::{LoginResponse, PrincipalDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeSession, SessionToken};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session created.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many login attempts.")
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .auth
        .login(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "Session ended (no-op without a session).", body = StatusResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    SessionToken(token): SessionToken,
) -> HttpResult<Json<StatusResponse>> {
    if let Some(token) = token {
        state.services.auth.logout(&token).await.into_http()?;
    }
    Ok(Json(StatusResponse {
        status: "ok".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The signed-in administrator.", body = PrincipalDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    session: MaybeSession,
) -> HttpResult<Json<PrincipalDto>> {
    state
        .services
        .admin_queries
        .me(session.session())
        .await
        .into_http()
        .map(Json)
}
