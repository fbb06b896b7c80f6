// src/application/ports/session.rs
use crate::{application::ApplicationResult, domain::session::Session};
use async_trait::async_trait;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: Session) -> ApplicationResult<()>;
    async fn find(&self, id: &str) -> ApplicationResult<Option<Session>>;
    async fn remove(&self, id: &str) -> ApplicationResult<()>;
}
