//! Authenticated Principal
//!
//! The identity resolved by the auth gate and handed to domain
//! handlers through request extensions. Handlers never reach into
//! shared session state; they receive this value.

use crate::id::UserId;

/// The signed-in staff member attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// `system_user.id`
    pub user_id: UserId,
    /// Full name, shown in views
    pub display_name: String,
}
