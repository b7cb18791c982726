//! Ticket Entity and Status Transitions
//!
//! A support ticket carries a lifecycle status and a `handled`
//! timestamp. The invariant is: `handled` is set if and only if the
//! status is Closed. Every status write in the system derives
//! `handled` through [`TicketStatus::handled_on_entry`], so the
//! invariant holds no matter which route performed the change.

use chrono::{DateTime, Utc};
use kernel::id::TicketId;

/// Ticket lifecycle status, matching the `ticket_status` seed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Waiting,
    Closed,
}

impl TicketStatus {
    /// Every status, in id order; drives the status dropdown
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Waiting,
        TicketStatus::Closed,
    ];

    /// Stored id (`ticket_status.id`)
    pub const fn id(self) -> i16 {
        match self {
            TicketStatus::Open => 1,
            TicketStatus::InProgress => 2,
            TicketStatus::Waiting => 3,
            TicketStatus::Closed => 4,
        }
    }

    /// Parse a stored or caller-supplied id
    pub const fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(TicketStatus::Open),
            2 => Some(TicketStatus::InProgress),
            3 => Some(TicketStatus::Waiting),
            4 => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    /// Human-readable description, matching the seed rows
    pub const fn description(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Waiting => "Waiting",
            TicketStatus::Closed => "Closed",
        }
    }

    pub const fn is_closed(self) -> bool {
        matches!(self, TicketStatus::Closed)
    }

    /// The `handled` timestamp a ticket must carry after entering
    /// this status. This is the single transition rule: Closed stamps
    /// the time, every other status clears it.
    pub fn handled_on_entry(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.is_closed() { Some(now) } else { None }
    }
}

/// One row of the ticket list
#[derive(Debug, Clone)]
pub struct TicketSummary {
    pub id: TicketId,
    pub arrived: DateTime<Utc>,
    /// Customer name; the join is LEFT so an orphaned ticket still lists
    pub customer: Option<String>,
    pub description: String,
    /// Status description from `ticket_status`
    pub status: String,
}

impl TicketSummary {
    pub fn arrived_display(&self) -> String {
        format_timestamp(self.arrived)
    }

    pub fn customer_display(&self) -> &str {
        self.customer.as_deref().unwrap_or("-")
    }
}

/// The ticket detail view's primary record
#[derive(Debug, Clone)]
pub struct TicketDetail {
    pub id: TicketId,
    pub arrived: DateTime<Utc>,
    pub customer: Option<String>,
    pub description: String,
    pub handled: Option<DateTime<Utc>>,
    /// Status description from `ticket_status`
    pub status: String,
    pub status_id: i16,
}

impl TicketDetail {
    pub fn arrived_display(&self) -> String {
        format_timestamp(self.arrived)
    }

    pub fn handled_display(&self) -> String {
        self.handled.map(format_timestamp).unwrap_or_default()
    }

    pub fn customer_display(&self) -> &str {
        self.customer.as_deref().unwrap_or("-")
    }

    pub fn is_closed(&self) -> bool {
        TicketStatus::from_id(self.status_id).is_some_and(TicketStatus::is_closed)
    }
}

/// Timestamp format shared by all views
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
