//! Auth Gate Middleware
//!
//! Every protected route sits behind [`require_session`]. A request
//! without a live session is redirected to the login page before any
//! domain handler or store access runs; this is a control-flow
//! branch, not an error.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session.
///
/// On success the resolved [`kernel::principal::CurrentUser`] is
/// inserted into request extensions for handlers to consume.
pub async fn require_session<S>(
    state: AuthGateState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let current_user = match token {
        Some(token) => use_case.execute(&token).await.ok(),
        None => None,
    };

    match current_user {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => Err(Redirect::to("/").into_response()),
    }
}
