//! Check Session Use Case
//!
//! Resolves a cookie token into the signed-in identity.

use std::sync::Arc;

use kernel::principal::CurrentUser;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token into the current user.
    pub async fn execute(&self, session_token: &str) -> AuthResult<CurrentUser> {
        let session = self.get_session(session_token).await?;
        Ok(session.current_user())
    }

    /// Just check whether the token proves a live session.
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }

    /// Get the session and record activity.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = parse_session_token(&self.config.session_secret, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        // Record activity in the background; the request does not
        // wait for this write.
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.touch(session_id, chrono::Utc::now()).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
