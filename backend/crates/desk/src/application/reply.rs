//! Reply Use Case
//!
//! Appends a staff reply to a ticket thread. Replies are attributed
//! to the configured admin account, not to the signed-in user.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{MessageId, TicketId};

use crate::application::config::DeskConfig;
use crate::domain::entity::message::NewMessage;
use crate::domain::repository::{MessageRepository, TicketRepository};
use crate::error::{DeskError, DeskResult};

/// Reply input
pub struct ReplyInput {
    pub ticket_id: TicketId,
    pub body: String,
    /// Thread message this reply answers, when the form carried one
    pub reply_to: Option<MessageId>,
}

/// Reply use case
pub struct ReplyUseCase<T, M>
where
    T: TicketRepository,
    M: MessageRepository,
{
    ticket_repo: Arc<T>,
    message_repo: Arc<M>,
    config: Arc<DeskConfig>,
}

impl<T, M> ReplyUseCase<T, M>
where
    T: TicketRepository,
    M: MessageRepository,
{
    pub fn new(ticket_repo: Arc<T>, message_repo: Arc<M>, config: Arc<DeskConfig>) -> Self {
        Self {
            ticket_repo,
            message_repo,
            config,
        }
    }

    pub async fn execute(&self, input: ReplyInput) -> DeskResult<MessageId> {
        if input.body.trim().is_empty() {
            return Err(DeskError::Validation("Message is required".to_string()));
        }

        if self.ticket_repo.find_detail(input.ticket_id).await?.is_none() {
            return Err(DeskError::TicketNotFound);
        }

        let message = NewMessage {
            ticket_id: input.ticket_id,
            from_user: self.config.admin_user_id,
            body: input.body,
            reply_to: input.reply_to,
        };

        let message_id = self.message_repo.create(&message, Utc::now()).await?;

        tracing::info!(
            ticket_id = %input.ticket_id,
            message_id = %message_id,
            "Reply added to ticket"
        );
        Ok(message_id)
    }
}
