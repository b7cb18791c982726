//! Application Configuration

use kernel::id::UserId;

/// Desk application configuration
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// The staff account to attribute outgoing replies to
    pub admin_user_id: UserId,
    /// Password pepper, shared with the auth crate
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            admin_user_id: UserId::from_i64(1),
            password_pepper: None,
        }
    }
}

impl DeskConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
