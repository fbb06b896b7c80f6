use super::AuthCommandService;
use crate::application::error::ApplicationResult;

impl AuthCommandService {
    /// Idempotent: unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> ApplicationResult<()> {
        let id = self.tokens.digest(token);
        self.session_store.remove(&id).await
    }
}
