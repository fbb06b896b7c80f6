// src/domain/session/entity.rs
use crate::domain::user::{Role, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated actor behind a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.to_string(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Server-side session. `id` is the digest of the bearer token, never the token itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub principal: Principal,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
