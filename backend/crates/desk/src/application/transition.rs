//! Ticket Status Transition Use Case
//!
//! Close, reopen and explicit status changes all go through here, so
//! the `handled` invariant (set iff Closed) holds for every route.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::TicketId;

use crate::domain::entity::ticket::TicketStatus;
use crate::domain::repository::TicketRepository;
use crate::error::{DeskError, DeskResult};

/// Ticket status transition use case
pub struct TransitionUseCase<T>
where
    T: TicketRepository,
{
    ticket_repo: Arc<T>,
}

impl<T> TransitionUseCase<T>
where
    T: TicketRepository,
{
    pub fn new(ticket_repo: Arc<T>) -> Self {
        Self { ticket_repo }
    }

    /// Move a ticket into `status`. The `handled` timestamp is
    /// derived from the target status, never passed in by callers.
    pub async fn execute(&self, ticket_id: TicketId, status: TicketStatus) -> DeskResult<()> {
        let now = Utc::now();
        let updated = self.ticket_repo.set_status(ticket_id, status, now).await?;

        if !updated {
            return Err(DeskError::TicketNotFound);
        }

        tracing::info!(
            ticket_id = %ticket_id,
            status = status.description(),
            "Ticket status changed"
        );
        Ok(())
    }

    /// Close a ticket (status 4, `handled` stamped)
    pub async fn close(&self, ticket_id: TicketId) -> DeskResult<()> {
        self.execute(ticket_id, TicketStatus::Closed).await
    }

    /// Reopen a ticket (status 1, `handled` cleared)
    pub async fn reopen(&self, ticket_id: TicketId) -> DeskResult<()> {
        self.execute(ticket_id, TicketStatus::Open).await
    }

    /// Change to a caller-supplied status id
    pub async fn change_to(&self, ticket_id: TicketId, status_id: i16) -> DeskResult<()> {
        let status = TicketStatus::from_id(status_id).ok_or(DeskError::UnknownStatus(status_id))?;
        self.execute(ticket_id, status).await
    }
}
