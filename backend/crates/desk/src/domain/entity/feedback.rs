use chrono::{DateTime, Utc};
use kernel::id::FeedbackId;

use super::ticket::format_timestamp;

/// One row of the customer feedback list
#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    pub id: FeedbackId,
    pub arrived: DateTime<Utc>,
    /// Customer name; anonymous feedback has none
    pub name: Option<String>,
    pub body: String,
}

impl FeedbackEntry {
    pub fn arrived_display(&self) -> String {
        format_timestamp(self.arrived)
    }

    pub fn name_display(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}
