//! Desk Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Desk-specific result type alias
pub type DeskResult<T> = Result<T, DeskError>;

/// Desk-specific error variants
#[derive(Debug, Error)]
pub enum DeskError {
    /// Missing or malformed request input; the message is shown to
    /// the client ("Ticket ID is required")
    #[error("{0}")]
    Validation(String),

    /// Referenced ticket does not exist
    #[error("Ticket not found")]
    TicketNotFound,

    /// Referenced user does not exist
    #[error("User not found")]
    UserNotFound,

    /// Status value outside the known set
    #[error("Unknown ticket status: {0}")]
    UnknownStatus(i16),

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

impl DeskError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeskError::Validation(_) | DeskError::UnknownStatus(_) => ErrorKind::BadRequest,
            DeskError::TicketNotFound | DeskError::UserNotFound => ErrorKind::NotFound,
            DeskError::Template(_) | DeskError::Database(_) | DeskError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DeskError::Database(e) => {
                tracing::error!(error = %e, "Desk database error");
            }
            DeskError::Template(e) => {
                tracing::error!(error = %e, "Desk template error");
            }
            DeskError::Internal(msg) => {
                tracing::error!(message = %msg, "Desk internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Desk error");
            }
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
