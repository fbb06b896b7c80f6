// src/application/authorization.rs
use chrono::{DateTime, Utc};

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        session::{AccessDecision, Principal, Session, authorize},
        user::Role,
    },
};

/// Run the gate and hand back the acting principal, or `Unauthorized` on any denial.
pub fn require_role(
    session: Option<&Session>,
    required: Role,
    now: DateTime<Utc>,
) -> ApplicationResult<&Principal> {
    match (authorize(session, required, now), session) {
        (AccessDecision::Allowed, Some(session)) => Ok(&session.principal),
        (AccessDecision::Denied(reason), _) => {
            tracing::debug!(required = %required, reason = reason.as_str(), "access denied");
            Err(ApplicationError::unauthorized(reason.as_str()))
        }
        (AccessDecision::Allowed, None) => Err(ApplicationError::unauthorized("missing session")),
    }
}
