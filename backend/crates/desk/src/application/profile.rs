//! Profile Update Use Case
//!
//! Loads and updates a staff member's account data. A blank password
//! field leaves the stored password alone; a non-blank one goes
//! through the platform password policy and is stored as a fresh
//! Argon2 hash.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::DeskConfig;
use crate::domain::entity::profile::{ProfileChanges, UserProfile};
use crate::domain::repository::ProfileRepository;
use crate::error::{DeskError, DeskResult};

/// Profile update input
pub struct ProfileUpdateInput {
    pub fullname: String,
    pub email: String,
    /// New password, when the form carried a non-blank one
    pub password: Option<String>,
}

/// Profile use case
pub struct ProfileUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
    config: Arc<DeskConfig>,
}

impl<P> ProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>, config: Arc<DeskConfig>) -> Self {
        Self {
            profile_repo,
            config,
        }
    }

    pub async fn find(&self, user_id: UserId) -> DeskResult<UserProfile> {
        self.profile_repo
            .find(user_id)
            .await?
            .ok_or(DeskError::UserNotFound)
    }

    pub async fn update(&self, user_id: UserId, input: ProfileUpdateInput) -> DeskResult<()> {
        let fullname = input.fullname.trim();
        if fullname.is_empty() {
            return Err(DeskError::Validation("Name is required".to_string()));
        }
        let email = input.email.trim();
        if email.is_empty() {
            return Err(DeskError::Validation("Email is required".to_string()));
        }

        let password_hash = match input.password.filter(|p| !p.trim().is_empty()) {
            Some(raw) => {
                let password = ClearTextPassword::new(raw)
                    .map_err(|e| DeskError::Validation(e.to_string()))?;
                let hashed = password
                    .hash(self.config.pepper())
                    .map_err(|e| DeskError::Internal(format!("Password hashing failed: {e}")))?;
                Some(hashed.as_phc_string().to_string())
            }
            None => None,
        };

        let changes = ProfileChanges {
            fullname: fullname.to_string(),
            email: email.to_string(),
            password_hash,
        };

        let updated = self.profile_repo.update(user_id, &changes).await?;
        if !updated {
            return Err(DeskError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "Profile updated");
        Ok(())
    }
}
