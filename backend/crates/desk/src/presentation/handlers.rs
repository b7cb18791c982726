//! HTTP Handlers
//!
//! All routes here sit behind the auth gate; handlers consume the
//! [`CurrentUser`] the gate put into request extensions and never
//! touch session state themselves.

use askama::Template;
use axum::Extension;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use kernel::id::{MessageId, TicketId, UserId};
use kernel::principal::CurrentUser;

use crate::application::config::DeskConfig;
use crate::application::profile::{ProfileUpdateInput, ProfileUseCase};
use crate::application::reply::{ReplyInput, ReplyUseCase};
use crate::application::transition::TransitionUseCase;
use crate::domain::entity::ticket::TicketStatus;
use crate::domain::repository::{
    CustomerRepository, DeskRepository, FeedbackRepository, MessageRepository, TicketRepository,
};
use crate::error::{DeskError, DeskResult};
use crate::presentation::dto::{
    ProfileForm, ReplyForm, TicketActionForm, TicketQuery, UpdateStatusForm,
};
use crate::presentation::views::{
    CustomersTemplate, FeedbackTemplate, TicketTemplate, TicketsTemplate, UserTemplate,
};

/// Shared state for desk handlers
#[derive(Clone)]
pub struct DeskAppState<R: DeskRepository> {
    pub repo: Arc<R>,
    pub config: Arc<DeskConfig>,
}

// ============================================================================
// Lists
// ============================================================================

/// GET /feedback
pub async fn feedback_list<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> DeskResult<Response> {
    let entries = FeedbackRepository::list(state.repo.as_ref()).await?;
    let html = FeedbackTemplate {
        user: &user,
        entries: &entries,
    }
    .render()?;
    Ok(Html(html).into_response())
}

/// GET /tickets
pub async fn ticket_list<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> DeskResult<Response> {
    let tickets = TicketRepository::list(state.repo.as_ref()).await?;
    let html = TicketsTemplate {
        user: &user,
        tickets: &tickets,
    }
    .render()?;
    Ok(Html(html).into_response())
}

/// GET /customers
pub async fn customer_list<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> DeskResult<Response> {
    let customers = CustomerRepository::list(state.repo.as_ref()).await?;
    let html = CustomersTemplate {
        user: &user,
        customers: &customers,
    }
    .render()?;
    Ok(Html(html).into_response())
}

// ============================================================================
// Ticket detail
// ============================================================================

/// GET /ticket?id=<id>
pub async fn ticket_detail<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<TicketQuery>,
) -> DeskResult<Response> {
    let ticket_id = require_ticket_id(query.id)?;

    let ticket = state
        .repo
        .find_detail(ticket_id)
        .await?
        .ok_or(DeskError::TicketNotFound)?;
    let messages = MessageRepository::list_for_ticket(state.repo.as_ref(), ticket_id).await?;

    let html = TicketTemplate {
        user: &user,
        ticket: &ticket,
        messages: &messages,
        statuses: &TicketStatus::ALL,
    }
    .render()?;
    Ok(Html(html).into_response())
}

// ============================================================================
// Reply
// ============================================================================

/// POST /reply
pub async fn reply<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Form(form): Form<ReplyForm>,
) -> DeskResult<Response> {
    let ticket_id = match (form.ticket_id, form.message.as_deref()) {
        (Some(id), Some(m)) if !m.trim().is_empty() => TicketId::from_i64(id),
        _ => {
            return Err(DeskError::Validation(
                "Ticket ID and message are required".to_string(),
            ));
        }
    };

    let use_case = ReplyUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    use_case
        .execute(ReplyInput {
            ticket_id,
            body: form.message.unwrap_or_default(),
            reply_to: form.reply_to.map(MessageId::from_i64),
        })
        .await?;

    Ok(redirect_to_ticket(ticket_id))
}

// ============================================================================
// Status transitions
// ============================================================================

/// POST /close-ticket
pub async fn close_ticket<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Form(form): Form<TicketActionForm>,
) -> DeskResult<Response> {
    let ticket_id = require_ticket_id(form.ticket_id)?;
    TransitionUseCase::new(state.repo.clone())
        .close(ticket_id)
        .await?;
    Ok(redirect_to_ticket(ticket_id))
}

/// POST /reopen-ticket
pub async fn reopen_ticket<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Form(form): Form<TicketActionForm>,
) -> DeskResult<Response> {
    let ticket_id = require_ticket_id(form.ticket_id)?;
    TransitionUseCase::new(state.repo.clone())
        .reopen(ticket_id)
        .await?;
    Ok(redirect_to_ticket(ticket_id))
}

/// POST /update-status
pub async fn update_status<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Form(form): Form<UpdateStatusForm>,
) -> DeskResult<Response> {
    let ticket_id = require_ticket_id(form.ticket_id)?;
    let new_status = form
        .new_status
        .ok_or_else(|| DeskError::Validation("New status is required".to_string()))?;

    TransitionUseCase::new(state.repo.clone())
        .change_to(ticket_id, new_status)
        .await?;
    Ok(redirect_to_ticket(ticket_id))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /user/{id}
pub async fn profile_page<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> DeskResult<Response> {
    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());
    let profile = use_case.find(UserId::from_i64(id)).await?;

    let html = UserTemplate {
        user: &user,
        profile: &profile,
    }
    .render()?;
    Ok(Html(html).into_response())
}

/// POST /user/{id}
pub async fn profile_update<R: DeskRepository>(
    State(state): State<DeskAppState<R>>,
    Path(id): Path<i64>,
    Form(form): Form<ProfileForm>,
) -> DeskResult<Response> {
    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .update(
            UserId::from_i64(id),
            ProfileUpdateInput {
                fullname: form.fullname.unwrap_or_default(),
                email: form.email.unwrap_or_default(),
                password: form.password,
            },
        )
        .await?;

    Ok(Redirect::to(&format!("/user/{id}")).into_response())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn require_ticket_id(id: Option<i64>) -> DeskResult<TicketId> {
    id.map(TicketId::from_i64)
        .ok_or_else(|| DeskError::Validation("Ticket ID is required".to_string()))
}

fn redirect_to_ticket(id: TicketId) -> Response {
    Redirect::to(&format!("/ticket?id={id}")).into_response()
}
