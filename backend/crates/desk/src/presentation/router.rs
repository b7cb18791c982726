//! Desk Router
//!
//! Routes only; the auth gate is layered on by the binary so the
//! whole router can be exercised with an in-memory gate in tests.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::DeskConfig;
use crate::domain::repository::DeskRepository;
use crate::infra::postgres::PgDeskRepository;
use crate::presentation::handlers::{self, DeskAppState};

/// Create the desk router with the PostgreSQL repository
pub fn desk_router(repo: PgDeskRepository, config: Arc<DeskConfig>) -> Router {
    desk_router_generic(repo, config)
}

/// Create a generic desk router for any repository implementation
pub fn desk_router_generic<R: DeskRepository>(repo: R, config: Arc<DeskConfig>) -> Router {
    let state = DeskAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/feedback", get(handlers::feedback_list::<R>))
        .route("/tickets", get(handlers::ticket_list::<R>))
        .route("/ticket", get(handlers::ticket_detail::<R>))
        .route("/reply", post(handlers::reply::<R>))
        .route("/close-ticket", post(handlers::close_ticket::<R>))
        .route("/reopen-ticket", post(handlers::reopen_ticket::<R>))
        .route("/update-status", post(handlers::update_status::<R>))
        .route("/customers", get(handlers::customer_list::<R>))
        .route(
            "/user/{id}",
            get(handlers::profile_page::<R>).post(handlers::profile_update::<R>),
        )
        .with_state(state)
}
