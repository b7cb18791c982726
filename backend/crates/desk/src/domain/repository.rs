//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer; tests provide in-memory implementations.

use chrono::{DateTime, Utc};
use kernel::id::{MessageId, TicketId, UserId};

use crate::domain::entity::customer::CustomerAccount;
use crate::domain::entity::feedback::FeedbackEntry;
use crate::domain::entity::message::{NewMessage, ThreadMessage};
use crate::domain::entity::profile::{ProfileChanges, UserProfile};
use crate::domain::entity::ticket::{TicketDetail, TicketStatus, TicketSummary};
use crate::error::DeskResult;

#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    /// All feedback, newest first
    async fn list(&self) -> DeskResult<Vec<FeedbackEntry>>;
}

#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// All customers, ordered by name
    async fn list(&self) -> DeskResult<Vec<CustomerAccount>>;
}

#[trait_variant::make(TicketRepository: Send)]
pub trait LocalTicketRepository {
    /// All tickets, newest first
    async fn list(&self) -> DeskResult<Vec<TicketSummary>>;

    /// One ticket with its status row joined in
    async fn find_detail(&self, id: TicketId) -> DeskResult<Option<TicketDetail>>;

    /// Move a ticket to `status`, deriving `handled` from the status.
    /// Returns false when no such ticket exists.
    async fn set_status(
        &self,
        id: TicketId,
        status: TicketStatus,
        now: DateTime<Utc>,
    ) -> DeskResult<bool>;
}

#[trait_variant::make(MessageRepository: Send)]
pub trait LocalMessageRepository {
    /// Conversation thread of a ticket, oldest first
    async fn list_for_ticket(&self, id: TicketId) -> DeskResult<Vec<ThreadMessage>>;

    async fn create(&self, message: &NewMessage, at: DateTime<Utc>) -> DeskResult<MessageId>;
}

#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn find(&self, id: UserId) -> DeskResult<Option<UserProfile>>;

    /// Returns false when no such user exists
    async fn update(&self, id: UserId, changes: &ProfileChanges) -> DeskResult<bool>;
}

/// Everything the desk router needs from one store handle.
pub trait DeskRepository:
    FeedbackRepository
    + CustomerRepository
    + TicketRepository
    + MessageRepository
    + ProfileRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> DeskRepository for T where
    T: FeedbackRepository
        + CustomerRepository
        + TicketRepository
        + MessageRepository
        + ProfileRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
