//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod sign_in;
pub mod sign_out;
pub mod token;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutcome, SignInUseCase};
pub use sign_out::SignOutUseCase;
