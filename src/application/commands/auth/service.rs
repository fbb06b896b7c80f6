// src/application/commands/auth/service.rs
use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{
    security::{PasswordHasher, SessionTokenGenerator},
    session::SessionStore,
    time::Clock,
};
use crate::domain::user::UserRepository;

pub struct AuthCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) tokens: Arc<dyn SessionTokenGenerator>,
    pub(super) session_store: Arc<dyn SessionStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) session_ttl: Duration,
}

impl AuthCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn SessionTokenGenerator>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            tokens,
            session_store,
            clock,
            session_ttl,
        }
    }
}
