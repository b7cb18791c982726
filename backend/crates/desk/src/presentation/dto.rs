//! Form and Query DTOs
//!
//! Required numeric fields are `Option` and treat `""` as absent, so
//! both a missing value and an empty input surface as our own 400
//! with a message, rather than an extractor rejection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// GET /ticket query string
#[derive(Debug, Clone, Deserialize)]
pub struct TicketQuery {
    pub id: Option<i64>,
}

/// POST /reply form body
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyForm {
    #[serde(rename = "ticketId", default, deserialize_with = "empty_string_as_none")]
    pub ticket_id: Option<i64>,
    pub message: Option<String>,
    /// Blank when the form's hidden field carries no parent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub reply_to: Option<i64>,
}

/// POST /close-ticket and /reopen-ticket form body
#[derive(Debug, Clone, Deserialize)]
pub struct TicketActionForm {
    #[serde(rename = "ticketId", default, deserialize_with = "empty_string_as_none")]
    pub ticket_id: Option<i64>,
}

/// POST /update-status form body
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusForm {
    #[serde(rename = "ticketId", default, deserialize_with = "empty_string_as_none")]
    pub ticket_id: Option<i64>,
    #[serde(rename = "newStatus", default, deserialize_with = "empty_string_as_none")]
    pub new_status: Option<i16>,
}

/// POST /user/{id} form body
#[derive(Clone, Deserialize)]
pub struct ProfileForm {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for ProfileForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileForm")
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Browsers submit empty inputs as `""`; treat that as absent.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
