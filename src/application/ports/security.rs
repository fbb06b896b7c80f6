// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Opaque bearer tokens for server-side sessions.
pub trait SessionTokenGenerator: Send + Sync {
    fn generate(&self) -> String;
    /// Stable digest used as the session key; the raw token is never stored.
    fn digest(&self, token: &str) -> String;
}
