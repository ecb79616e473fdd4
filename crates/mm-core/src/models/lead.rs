//! Lead entity - a contact request as the business system accepts it.

use crate::{CoreError, Result};

use serde::{Deserialize, Serialize};

/// A sales lead ready for transmission.
///
/// Built from the contact form after the optional phone number has been
/// folded into the message text; no structured phone field exists
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Lead {
    /// Create a lead, enforcing the required-field rules: `name`, `email`
    /// and `message` must be non-empty, and `email` must be shaped like an
    /// email address.
    #[track_caller]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        let message = message.into();

        if name.is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        if email.is_empty() {
            return Err(CoreError::validation("email must not be empty"));
        }
        if !is_email_shaped(&email) {
            return Err(CoreError::validation(format!(
                "'{}' is not an email address",
                email
            )));
        }
        if message.is_empty() {
            return Err(CoreError::validation("message must not be empty"));
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// Minimal shape check: a single `@` with non-empty, whitespace-free halves.
fn is_email_shaped(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !local.contains(char::is_whitespace)
                && !domain.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    }
}
