//! Session Entity
//!
//! Represents an authenticated staff session. Stored server-side;
//! the cookie only carries a signed reference to `session_id`.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use kernel::principal::CurrentUser;
use uuid::Uuid;

/// Server-side session row.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to `system_user`
    pub user_id: UserId,
    /// Full name captured at sign-in, shown in views
    pub display_name: String,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session.
    ///
    /// TTL is provided by the application layer (config), not
    /// hard-coded here.
    pub fn new(user_id: UserId, display_name: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            display_name,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// The identity this session proves, as handed to handlers.
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            user_id: self.user_id,
            display_name: self.display_name.clone(),
        }
    }
}
