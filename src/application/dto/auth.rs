use crate::domain::{session::Principal, user::Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrincipalDto {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
}

impl From<&Principal> for PrincipalDto {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.user_id.into(),
            email: principal.email.clone(),
            name: principal.name.clone(),
            role: principal.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque bearer token; also accepted as the `medee_session` cookie.
    pub token: String,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub user: PrincipalDto,
}
