//! Auth (Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, credential projection, repository traits
//! - `application/` - Use cases (sign-in, sign-out, check-session)
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - Login page handlers, auth-gate middleware, router
//!
//! ## Behavior
//! - Sign-in by user id or email plus password
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Unauthenticated requests to protected routes redirect to `/`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Session tokens are `<uuid>.<base64url HMAC-SHA256>`; the cookie
//!   value is useless without the server-side session row
//! - Failed sign-ins render the login view again; they are control
//!   flow, not errors

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

pub mod config {
    pub use crate::application::config::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
