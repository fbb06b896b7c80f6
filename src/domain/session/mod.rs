// src/domain/session/mod.rs
pub mod authorization;
pub mod entity;

pub use authorization::{AccessDecision, DenialReason, authorize};
pub use entity::{Principal, Session};
