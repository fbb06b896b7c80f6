// src/infrastructure/security/token.rs
use crate::application::ports::security::SessionTokenGenerator;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

const TOKEN_BYTES: usize = 32;

/// 256-bit random bearer tokens, URL-safe base64. Sessions are keyed by the
/// BLAKE3 hex digest so a leaked store does not leak usable tokens.
#[derive(Default, Clone)]
pub struct OpaqueTokenGenerator;

impl SessionTokenGenerator for OpaqueTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    fn digest(&self, token: &str) -> String {
        blake3::hash(token.as_bytes()).to_hex().to_string()
    }
}
