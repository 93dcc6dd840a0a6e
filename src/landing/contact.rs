use std::collections::BTreeMap;

use crate::api::ApiResult;
use crate::tokens::{RequestToken, RequestTokens};

pub const CONTACT_ERROR_NOTICE: &str = "An error occurred. Please try again.";
pub const STATUS_CLEAR_MS: u64 = 5000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Form fields keyed by input name, as the backend expects them.
    pub fn to_payload(&self) -> BTreeMap<String, String> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactStatus {
    pub message: String,
    pub success: bool,
}

impl ContactStatus {
    pub fn class(&self) -> &'static str {
        if self.success { "success" } else { "error" }
    }
}

/// Submit state of the contact form. The button is disabled while a
/// submission is in flight, and a status message only clears itself if no
/// newer submission has replaced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    submitting: bool,
    status: Option<ContactStatus>,
    tokens: RequestTokens,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&ContactStatus> {
        self.status.as_ref()
    }

    pub fn begin(&mut self) -> Option<RequestToken> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.tokens.issue())
    }

    /// Records the outcome and restores the button. Returns `true` when the
    /// fields should be reset.
    pub fn finish(&mut self, token: RequestToken, outcome: ApiResult<String>) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        self.submitting = false;
        match outcome {
            Ok(message) => {
                self.status = Some(ContactStatus {
                    message,
                    success: true,
                });
                true
            }
            Err(err) => {
                tracing::error!("contact form submission failed: {err}");
                let message = err.server_message().unwrap_or(CONTACT_ERROR_NOTICE).to_string();
                self.status = Some(ContactStatus {
                    message,
                    success: false,
                });
                false
            }
        }
    }

    pub fn clear_status(&mut self, token: RequestToken) -> bool {
        if !self.tokens.is_current(token) || self.submitting {
            return false;
        }
        self.status = None;
        true
    }
}
