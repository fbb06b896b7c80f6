use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::session::SessionStore,
};
use crate::domain::session::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local session store, used when no `REDIS_URL` is configured.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    /// Also drops every stored session that had expired by the new one's `issued_at`.
    async fn create(&self, session: Session) -> ApplicationResult<()> {
        let mut sessions = self.guard()?;
        let now = session.issued_at;
        sessions.retain(|_, stored| !stored.is_expired(now));
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn find(&self, id: &str) -> ApplicationResult<Option<Session>> {
        Ok(self.guard()?.get(id).cloned())
    }

    async fn remove(&self, id: &str) -> ApplicationResult<()> {
        self.guard()?.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Principal;
    use crate::domain::user::{Role, UserId};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn session(id: &str, issued_at: DateTime<Utc>) -> Session {
        Session {
            id: id.to_string(),
            principal: Principal {
                user_id: UserId(1),
                email: "admin@news.mn".into(),
                name: None,
                role: Role::Admin,
            },
            issued_at,
            expires_at: issued_at + Duration::days(30),
        }
    }

    #[tokio::test]
    async fn create_sweeps_sessions_that_were_never_presented_again() {
        let store = InMemorySessionStore::new();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        store.create(session("stale", start)).await.unwrap();
        store.create(session("live", start + Duration::days(10))).await.unwrap();
        store.create(session("fresh", start + Duration::days(31))).await.unwrap();

        assert!(store.find("stale").await.unwrap().is_none());
        assert!(store.find("live").await.unwrap().is_some());
        assert!(store.find("fresh").await.unwrap().is_some());
        assert_eq!(store.guard().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn remove_forgets_a_session() {
        let store = InMemorySessionStore::new();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        store.create(session("a", start)).await.unwrap();

        store.remove("a").await.unwrap();

        assert!(store.find("a").await.unwrap().is_none());
    }
}
