use super::AuthCommandService;
use crate::{application::error::ApplicationResult, domain::session::Session};

impl AuthCommandService {
    /// Look up the live session behind a bearer token. Expired sessions are evicted
    /// and reported as absent.
    pub async fn resolve_session(&self, token: &str) -> ApplicationResult<Option<Session>> {
        let id = self.tokens.digest(token);
        let Some(session) = self.session_store.find(&id).await? else {
            return Ok(None);
        };

        if session.is_expired(self.clock.now()) {
            self.session_store.remove(&id).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }
}
