// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use chrono::Duration;
use serde_json::Value;

use medee::application::ports::security::SessionTokenGenerator;
use medee::application::ports::session::SessionStore;
use medee::application::services::{ApplicationServices, Ports, ServiceSettings};
use medee::domain::session::{Principal, Session};
use medee::domain::user::{Email, NewUser, PasswordHash, Role, UserRepository};
use medee::infrastructure::security::session_store::InMemorySessionStore;
use medee::infrastructure::util::DefaultSlugifier;
use medee::presentation::http::{routes, state::HttpState};

use super::mocks::{MemoryDb, PlainPasswordHasher, SequentialTokens, TestClock, fixed_now};

pub const ADMIN_EMAIL: &str = "admin@news.mn";
pub const ADMIN_PASSWORD: &str = "password123";

/// Services wired over the in-memory adapters, plus handles on those adapters.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub db: Arc<MemoryDb>,
    pub clock: Arc<TestClock>,
    pub sessions: Arc<InMemorySessionStore>,
    pub tokens: Arc<SequentialTokens>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(ServiceSettings::default())
    }

    pub fn with_settings(settings: ServiceSettings) -> Self {
        let db = Arc::new(MemoryDb::new());
        let clock = Arc::new(TestClock::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let tokens = Arc::new(SequentialTokens::default());

        let ports = Ports {
            user_repo: db.clone(),
            category_read: db.clone(),
            category_write: db.clone(),
            news_read: db.clone(),
            news_write: db.clone(),
            sluggable: db.clone(),
            password_hasher: Arc::new(PlainPasswordHasher),
            tokens: tokens.clone(),
            session_store: sessions.clone(),
            clock: clock.clone(),
            slugifier: Arc::new(DefaultSlugifier),
        };

        Self {
            services: Arc::new(ApplicationServices::new(ports, settings)),
            db,
            clock,
            sessions,
            tokens,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        routes::build_router_with_rate_limiter(state, false)
    }

    /// Inserts a user with the given role and password [`ADMIN_PASSWORD`].
    pub async fn add_user(&self, email: &str, role: Role) -> Principal {
        let user = UserRepository::insert(
            self.db.as_ref(),
            NewUser {
                email: Email::new(email).unwrap(),
                name: Some(format!("{role} user")),
                password_hash: PasswordHash::new(format!("plain:{ADMIN_PASSWORD}")).unwrap(),
                role,
                created_at: fixed_now(),
            },
        )
        .await
        .unwrap();
        Principal::from(&user)
    }

    /// Creates a user and a live session for it; returns the bearer token.
    pub async fn login_as(&self, email: &str, role: Role) -> (String, Session) {
        let principal = self.add_user(email, role).await;
        let token = self.tokens.generate();
        let now = fixed_now();
        let session = Session {
            id: self.tokens.digest(&token),
            principal,
            issued_at: now,
            expires_at: now + Duration::days(30),
        };
        self.sessions.create(session.clone()).await.unwrap();
        (token, session)
    }

    pub async fn admin(&self) -> (String, Session) {
        self.login_as(ADMIN_EMAIL, Role::Admin).await
    }

    pub async fn editor(&self) -> (String, Session) {
        self.login_as("editor@news.mn", Role::Editor).await
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
