// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::session::Session,
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

pub const SESSION_COOKIE: &str = "medee_session";

/// Raw session token from `Authorization: Bearer` or, failing that, the session cookie.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

/// The caller's live session, if any. Unknown or expired tokens resolve to `None`
/// so the authorization gate, not the extractor, decides the outcome.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

impl MaybeSession {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(token_from_parts(parts)))
    }
}

impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = token_from_parts(parts) else {
            return Ok(Self(None));
        };

        let state = app_state(parts)?;
        let session = state
            .services
            .resolve_session(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(session))
    }
}
