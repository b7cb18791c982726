//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer; tests provide in-memory implementations.

use crate::domain::entity::{credential::Credential, session::Session};
use crate::error::AuthResult;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Credential lookup for sign-in
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find one user where the identifier matches the stored id or
    /// the stored email. The identifier is always bound as a query
    /// parameter, never interpolated.
    async fn find_by_identifier(&self, identifier: &str) -> AuthResult<Option<Credential>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find an unexpired session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Record session activity
    async fn touch(&self, session_id: Uuid, at: DateTime<Utc>) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
