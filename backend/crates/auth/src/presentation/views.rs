//! Login View

use askama::Template;

/// The login page, with an optional outcome message
/// ("Login not successful", "Invalid password").
#[derive(Template)]
#[template(path = "index.html")]
pub struct LoginTemplate {
    /// Empty when there is nothing to report
    pub message: String,
}

impl LoginTemplate {
    pub fn blank() -> Self {
        Self {
            message: String::new(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
