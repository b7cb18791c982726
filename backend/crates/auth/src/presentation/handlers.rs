//! HTTP Handlers
//!
//! Login page, login submission, logout. These are the only routes
//! reachable without a session.

use askama::Template;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, SignInInput, SignInOutcome, SignInUseCase, SignOutUseCase,
};
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::LoginForm;
use crate::presentation::views::LoginTemplate;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login page
// ============================================================================

/// GET /
///
/// Shows the login form, or redirects straight to the feedback list
/// when the request already carries a valid session.
pub async fn login_page<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
        if use_case.is_valid(&token).await {
            return Ok(Redirect::to("/feedback").into_response());
        }
    }

    Ok(Html(LoginTemplate::blank().render()?).into_response())
}

// ============================================================================
// Login submission
// ============================================================================

/// POST /login
///
/// Failed attempts re-render the login view with a message and
/// HTTP 200; only infrastructure faults become error statuses.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let outcome = use_case
        .execute(SignInInput {
            identifier: form.identifier,
            password: form.password,
        })
        .await?;

    match outcome {
        SignInOutcome::Success { session_token, .. } => {
            let cookie =
                platform::cookie::set_cookie_header(&state.config.cookie_config(), &session_token);
            Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/feedback")).into_response())
        }
        SignInOutcome::UnknownIdentifier => {
            let html = LoginTemplate::with_message("Login not successful").render()?;
            Ok(Html(html).into_response())
        }
        SignInOutcome::WrongPassword => {
            let html = LoginTemplate::with_message("Invalid password").render()?;
            Ok(Html(html).into_response())
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Destroys the session. A store failure surfaces as 500; a stale or
/// forged cookie just falls through to the redirect.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        match use_case.execute(&token).await {
            Ok(()) | Err(AuthError::SessionInvalid) => {}
            Err(e) => return Err(e),
        }
    }

    let clear = state.config.cookie_config().build_delete_cookie();
    let clear = HeaderValue::from_str(&clear)
        .map_err(|e| AuthError::Internal(format!("Invalid cookie header: {e}")))?;

    Ok(([(header::SET_COOKIE, clear)], Redirect::to("/")).into_response())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}
