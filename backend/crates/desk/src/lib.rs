//! Desk Module - tickets, feedback, customers, profiles
//!
//! The support-desk domain behind the auth gate. Clean Architecture
//! structure, same as the auth crate:
//! - `domain/` - Entities, status transitions, repository traits
//! - `application/` - Use cases (transition, reply, profile update)
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, view templates, router
//!
//! ## Behavior
//! - Every route runs one or two parameterized statements and then
//!   renders a view or redirects; there is no retry or caching layer
//! - Ticket status writes all pass through one transition rule:
//!   entering Closed stamps `handled`, entering any other status
//!   clears it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::DeskConfig;
pub use error::{DeskError, DeskResult};
pub use infra::postgres::PgDeskRepository;
pub use presentation::router::{desk_router, desk_router_generic};
