// src/domain/session/authorization.rs
use crate::domain::session::entity::Session;
use crate::domain::user::Role;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    MissingSession,
    Expired,
    InsufficientRole,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::MissingSession => "authentication required",
            DenialReason::Expired => "session expired",
            DenialReason::InsufficientRole => "insufficient role",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Per-request gate: a live session whose principal holds exactly `required`.
pub fn authorize(session: Option<&Session>, required: Role, now: DateTime<Utc>) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::Denied(DenialReason::MissingSession);
    };

    if session.is_expired(now) {
        return AccessDecision::Denied(DenialReason::Expired);
    }

    if session.principal.role != required {
        return AccessDecision::Denied(DenialReason::InsufficientRole);
    }

    AccessDecision::Allowed
}
