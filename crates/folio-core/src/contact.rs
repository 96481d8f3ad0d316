//! Contact form with simulated submission.
//!
//! Nothing is sent anywhere. Submitting validates the message, flips the form
//! into the sending state for [`SUBMIT_DELAY`], then reports success and
//! resets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Simulated network latency.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

pub const SUCCESS_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";

pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> FolioResult<()> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("message", &self.message)?;

        let email = self.email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
        if !valid {
            return Err(FolioError::InvalidField {
                field: "email",
                reason: format!("'{email}' is not an email address"),
            });
        }
        Ok(())
    }
}

fn required(field: &'static str, value: &str) -> FolioResult<()> {
    if value.trim().is_empty() {
        return Err(FolioError::InvalidField {
            field,
            reason: "is required".to_string(),
        });
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    state: SubmitState,
    in_flight: Option<ContactMessage>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    /// Start a submission. The host calls [`ContactForm::finish`] after
    /// [`SUBMIT_DELAY`].
    pub fn submit(&mut self, message: ContactMessage) -> FolioResult<()> {
        if self.is_sending() {
            return Err(FolioError::Busy);
        }
        message.validate()?;
        tracing::info!(from = %message.email, subject = %message.subject, "Simulating contact submission");
        self.in_flight = Some(message);
        self.state = SubmitState::Sending;
        Ok(())
    }

    /// Complete the in-flight submission, returning the success notice.
    pub fn finish(&mut self) -> Option<&'static str> {
        self.in_flight.take()?;
        self.state = SubmitState::Idle;
        Some(SUCCESS_NOTICE)
    }
}
