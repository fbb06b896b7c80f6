// tests/support/mocks/security.rs
use async_trait::async_trait;
use medee::application::{ApplicationError, ApplicationResult};
use std::sync::atomic::{AtomicU64, Ordering};

/// Stores `plain:<password>`; argon2 is exercised by its own unit test.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl medee::application::ports::security::PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        if password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// `token-1`, `token-2`, ... with a readable digest.
#[derive(Debug, Default)]
pub struct SequentialTokens {
    next: AtomicU64,
}

impl medee::application::ports::security::SessionTokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("token-{n}")
    }

    fn digest(&self, token: &str) -> String {
        format!("digest:{token}")
    }
}
