//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Note that failed sign-ins are
//! *not* errors: they are outcomes rendered back to the user.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Session not found, expired, or token signature invalid
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Stored password hash could not be parsed
    #[error("Stored credential is unusable")]
    CorruptCredential,

    /// Template rendering error
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::CorruptCredential
            | AuthError::Template(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Template(e) => {
                tracing::error!(error = %e, "Auth template error");
            }
            AuthError::CorruptCredential => {
                tracing::error!("Stored password hash is not a valid PHC string");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::SessionInvalid => {
                tracing::debug!("Invalid or expired session token");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
