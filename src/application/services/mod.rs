// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            auth::AuthCommandService, categories::CategoryCommandService,
            news::NewsCommandService, seed::SeedService,
        },
        ports::{
            security::{PasswordHasher, SessionTokenGenerator},
            session::SessionStore,
            time::Clock,
            util::Slugifier,
        },
        queries::{admin::AdminQueryService, public::PublicQueryService},
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        news::{NewsReadRepository, NewsWriteRepository},
        session::Session,
        slug::{SlugService, SluggableRepository},
        user::UserRepository,
    },
};

pub const DEFAULT_SLUG_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_HOME_FEED_LIMIT: u32 = 10;
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Tunables threaded into the command and query services.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub slug_max_attempts: u32,
    pub home_feed_limit: u32,
    pub session_ttl: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            slug_max_attempts: DEFAULT_SLUG_MAX_ATTEMPTS,
            home_feed_limit: DEFAULT_HOME_FEED_LIMIT,
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECONDS),
        }
    }
}

/// Every adapter the application layer needs, gathered in one place so the
/// binary and the tests wire services the same way.
#[derive(Clone)]
pub struct Ports {
    pub user_repo: Arc<dyn UserRepository>,
    pub category_read: Arc<dyn CategoryReadRepository>,
    pub category_write: Arc<dyn CategoryWriteRepository>,
    pub news_read: Arc<dyn NewsReadRepository>,
    pub news_write: Arc<dyn NewsWriteRepository>,
    pub sluggable: Arc<dyn SluggableRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn SessionTokenGenerator>,
    pub session_store: Arc<dyn SessionStore>,
    pub clock: Arc<dyn Clock>,
    pub slugifier: Arc<dyn Slugifier>,
}

pub struct ApplicationServices {
    pub auth: Arc<AuthCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub news_commands: Arc<NewsCommandService>,
    pub public_queries: Arc<PublicQueryService>,
    pub admin_queries: Arc<AdminQueryService>,
    pub seed: Arc<SeedService>,
}

impl ApplicationServices {
    pub fn new(ports: Ports, settings: ServiceSettings) -> Self {
        let slug_service = Arc::new(SlugService::new(
            Arc::clone(&ports.sluggable),
            Arc::clone(&ports.slugifier),
        ));

        let auth = Arc::new(AuthCommandService::new(
            Arc::clone(&ports.user_repo),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.tokens),
            Arc::clone(&ports.session_store),
            Arc::clone(&ports.clock),
            settings.session_ttl,
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&ports.category_write),
            Arc::clone(&ports.category_read),
            Arc::clone(&slug_service),
            Arc::clone(&ports.clock),
            settings.slug_max_attempts,
        ));

        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&ports.news_write),
            Arc::clone(&ports.news_read),
            Arc::clone(&ports.category_read),
            Arc::clone(&slug_service),
            Arc::clone(&ports.clock),
            settings.slug_max_attempts,
        ));

        let public_queries = Arc::new(PublicQueryService::new(
            Arc::clone(&ports.news_read),
            Arc::clone(&ports.category_read),
            settings.home_feed_limit,
        ));

        let admin_queries = Arc::new(AdminQueryService::new(
            Arc::clone(&ports.news_read),
            Arc::clone(&ports.category_read),
            Arc::clone(&ports.user_repo),
            Arc::clone(&ports.clock),
        ));

        let seed = Arc::new(SeedService::new(
            Arc::clone(&ports.user_repo),
            Arc::clone(&ports.category_read),
            Arc::clone(&ports.category_write),
            Arc::clone(&ports.password_hasher),
            slug_service,
            Arc::clone(&ports.clock),
            settings.slug_max_attempts,
        ));

        Self {
            auth,
            category_commands,
            news_commands,
            public_queries,
            admin_queries,
            seed,
        }
    }

    /// Session for a raw bearer token, or `None` when unknown or expired.
    pub async fn resolve_session(&self, token: &str) -> ApplicationResult<Option<Session>> {
        self.auth.resolve_session(token).await
    }
}
