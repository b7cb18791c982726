//! Sign In Use Case
//!
//! Authenticates a staff member and creates a session. The two
//! failure outcomes are deliberately distinct values, not errors:
//! the login view reports "Login not successful" for an unknown
//! identifier and "Invalid password" for a hash mismatch, both with
//! HTTP 200.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// User id or email, as typed into the login form
    pub identifier: String,
    /// Password
    pub password: String,
}

/// Sign in outcome
pub enum SignInOutcome {
    /// Session established
    Success {
        /// Token for the session cookie
        session_token: String,
        /// Full name of the signed-in user
        display_name: String,
    },
    /// No user matches the identifier
    UnknownIdentifier,
    /// User exists, password does not verify
    WrongPassword,
}

/// Sign in use case
pub struct SignInUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<C, S> SignInUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(credential_repo: Arc<C>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutcome> {
        let credential = match self
            .credential_repo
            .find_by_identifier(&input.identifier)
            .await?
        {
            Some(c) => c,
            None => return Ok(SignInOutcome::UnknownIdentifier),
        };

        let stored = HashedPassword::from_phc_string(&credential.password_hash)
            .map_err(|_| AuthError::CorruptCredential)?;

        let typed = ClearTextPassword::for_verification(input.password);
        if !stored.verify(&typed, self.config.pepper()) {
            tracing::warn!(user_id = %credential.user_id, "Sign-in with wrong password");
            return Ok(SignInOutcome::WrongPassword);
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(credential.user_id, credential.fullname.clone(), ttl);
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %credential.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutcome::Success {
            session_token,
            display_name: credential.fullname,
        })
    }
}
