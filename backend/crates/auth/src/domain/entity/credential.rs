//! Credential Entity
//!
//! The projection of a `system_user` row that sign-in needs: who the
//! user is and the stored password hash. Profile data lives in the
//! desk domain; this type never leaves the auth crate.

use kernel::id::UserId;

/// Sign-in credential for one staff user.
#[derive(Clone)]
pub struct Credential {
    pub user_id: UserId,
    /// Full name, becomes the session's display name
    pub fullname: String,
    /// PHC-formatted Argon2id hash
    pub password_hash: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("user_id", &self.user_id)
            .field("fullname", &self.fullname)
            .field("password_hash", &"[HASH]")
            .finish()
    }
}
