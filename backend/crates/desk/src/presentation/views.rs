//! Desk Views
//!
//! Server-rendered askama templates for the protected pages. Each
//! template borrows the entities the handler loaded; formatting
//! helpers live on the entities themselves.

use askama::Template;
use kernel::principal::CurrentUser;

use crate::domain::entity::customer::CustomerAccount;
use crate::domain::entity::feedback::FeedbackEntry;
use crate::domain::entity::message::ThreadMessage;
use crate::domain::entity::profile::UserProfile;
use crate::domain::entity::ticket::{TicketDetail, TicketStatus, TicketSummary};

/// GET /feedback
#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate<'a> {
    pub user: &'a CurrentUser,
    pub entries: &'a [FeedbackEntry],
}

/// GET /tickets
#[derive(Template)]
#[template(path = "tickets.html")]
pub struct TicketsTemplate<'a> {
    pub user: &'a CurrentUser,
    pub tickets: &'a [TicketSummary],
}

/// GET /ticket
#[derive(Template)]
#[template(path = "ticket.html")]
pub struct TicketTemplate<'a> {
    pub user: &'a CurrentUser,
    pub ticket: &'a TicketDetail,
    pub messages: &'a [ThreadMessage],
    pub statuses: &'a [TicketStatus],
}

/// GET /customers
#[derive(Template)]
#[template(path = "customers.html")]
pub struct CustomersTemplate<'a> {
    pub user: &'a CurrentUser,
    pub customers: &'a [CustomerAccount],
}

/// GET /user/{id}
#[derive(Template)]
#[template(path = "user.html")]
pub struct UserTemplate<'a> {
    pub user: &'a CurrentUser,
    pub profile: &'a UserProfile,
}
