//! Session Tokens
//!
//! The cookie value is `<session uuid>.<base64url HMAC-SHA256>`.
//! Signing keeps a tampered cookie from ever reaching the session
//! store; the session row itself is the source of truth.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Sign a session id into a cookie token.
pub fn sign_session_token(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a cookie token back into a session id.
pub fn parse_session_token(secret: &[u8; 32], token: &str) -> AuthResult<Uuid> {
    let (session_id_str, signature_b64) = token
        .split_once('.')
        .ok_or(AuthError::SessionInvalid)?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str.parse().map_err(|_| AuthError::SessionInvalid)
}
