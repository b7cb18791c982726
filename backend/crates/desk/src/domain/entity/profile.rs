use kernel::id::{CustomerId, UserId};

/// A system user's editable account data
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub fullname: String,
    pub email: String,
    pub customer_id: Option<CustomerId>,
}

/// Changes to persist on a profile update. A `None` password hash
/// leaves the stored password untouched.
#[derive(Clone)]
pub struct ProfileChanges {
    pub fullname: String,
    pub email: String,
    pub password_hash: Option<String>,
}

impl std::fmt::Debug for ProfileChanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileChanges")
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
