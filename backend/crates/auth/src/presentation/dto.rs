//! Form DTOs

use std::fmt;

use serde::Deserialize;

/// POST /login form body
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    /// User id or email
    pub identifier: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
