// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session::SessionStore;
use crate::domain::session::Session;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

const KEY_PREFIX: &str = "medee:session:";

/// Sessions as JSON values that Redis expires together with the session.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
}

impl RedisSessionStore {
    /// Create a new Redis backed session store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn conn(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn key(id: &str) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Lifetime measured on the clock that issued the session.
fn ttl_seconds(session: &Session) -> u64 {
    (session.expires_at - session.issued_at).num_seconds().max(1) as u64
}

fn redis_err(err: redis::RedisError) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, session: Session) -> ApplicationResult<()> {
        let ttl = ttl_seconds(&session);
        let payload = serde_json::to_string(&session)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(key(&session.id), payload, ttl)
            .await
            .map_err(redis_err)
    }

    async fn find(&self, id: &str) -> ApplicationResult<Option<Session>> {
        let mut conn = self.conn().await?;
        let raw: Option<String> = conn.get(key(id)).await.map_err(redis_err)?;

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(session) => Ok(Some(session)),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable session payload");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &str) -> ApplicationResult<()> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(key(id)).await.map_err(redis_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Principal;
    use crate::domain::user::{Role, UserId};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn ttl_follows_the_issuing_clock() {
        let issued_at = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        let session = Session {
            id: "digest".into(),
            principal: Principal {
                user_id: UserId(1),
                email: "admin@news.mn".into(),
                name: None,
                role: Role::Admin,
            },
            issued_at,
            expires_at: issued_at + Duration::days(30),
        };

        assert_eq!(ttl_seconds(&session), 30 * 24 * 60 * 60);
    }
}
