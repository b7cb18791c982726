use chrono::{DateTime, Utc};
use kernel::id::{MessageId, TicketId, UserId};

use super::ticket::format_timestamp;

/// One message of a ticket conversation thread
#[derive(Debug, Clone)]
pub struct ThreadMessage {
    pub id: MessageId,
    pub sent_at: DateTime<Utc>,
    /// Sender name; LEFT join, a deleted user still shows the message
    pub sender: Option<String>,
    pub body: String,
}

impl ThreadMessage {
    pub fn sent_at_display(&self) -> String {
        format_timestamp(self.sent_at)
    }

    pub fn sender_display(&self) -> &str {
        self.sender.as_deref().unwrap_or("-")
    }
}

/// A message to append to a ticket thread
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub ticket_id: TicketId,
    pub from_user: UserId,
    pub body: String,
    pub reply_to: Option<MessageId>,
}
