//! Contact form validation with a simulated send.
//!
//! Nothing leaves the page. A valid submission shows "Sending…", then after a
//! fixed delay a thank-you message, and the form is reset. Validation stops at
//! the first failure: missing fields are reported before a bad email.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use regex_lite::Regex;

use crate::consts::{
    FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, STATUS_INVALID_EMAIL, STATUS_MISSING_FIELDS,
    NON_SPACE_CLASS, STATUS_SENDING, STATUS_SENT,
};
use crate::dom::{Element, FormFields};
use crate::error::Result;
use crate::schedule::Scheduler;

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field was blank; nothing was sent.
    MissingFields,
    /// The email did not look like an address; nothing was sent.
    InvalidEmail,
    /// The simulated send started; the thank-you follows after the delay.
    Sending,
}

impl SubmitOutcome {
    /// Status text shown right after the attempt.
    #[must_use]
    pub fn status(self) -> &'static str {
        match self {
            Self::MissingFields => STATUS_MISSING_FIELDS,
            Self::InvalidEmail => STATUS_INVALID_EMAIL,
            Self::Sending => STATUS_SENDING,
        }
    }
}

/// Trimmed field values of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Read the three fields; a missing control reads as empty.
    pub fn read<F: FormFields>(form: &F) -> Self {
        let field = |name: &str| trim_js(&form.field_value(name).unwrap_or_default()).to_owned();
        Self { name: field(FIELD_NAME), email: field(FIELD_EMAIL), message: field(FIELD_MESSAGE) }
    }

    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }
}

/// Whitespace as JavaScript's `trim` and `\s` see it: Unicode `White_Space`
/// without U+0085, plus the BOM.
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strip leading and trailing [`is_js_whitespace`] characters.
#[must_use]
pub fn trim_js(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Permissive email shape: something, `@`, something, `.`, something, with no
/// whitespace inside any of the parts.
fn email_pattern() -> String {
    format!(r"{NON_SPACE_CLASS}+@{NON_SPACE_CLASS}+\.{NON_SPACE_CLASS}+")
}

pub struct ContactFormHandler<F, E, S> {
    form: F,
    status: E,
    scheduler: S,
    delay_ms: u32,
    email: Regex,
}

impl<F, E, S> ContactFormHandler<F, E, S>
where
    F: FormFields + Clone + 'static,
    E: Element + Clone + 'static,
    S: Scheduler,
{
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] if the email pattern fails to compile.
    pub fn new(form: F, status: E, scheduler: S, delay_ms: u32) -> Result<Self> {
        Ok(Self { form, status, scheduler, delay_ms, email: Regex::new(&email_pattern())? })
    }

    /// Whether `email` contains something shaped like `a@b.c`.
    #[must_use]
    pub fn validate_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    /// Validate and, if valid, start the simulated send.
    pub fn on_submit(&self) -> SubmitOutcome {
        let msg = ContactMessage::read(&self.form);
        let outcome = if msg.has_blank_field() {
            SubmitOutcome::MissingFields
        } else if !self.validate_email(&msg.email) {
            SubmitOutcome::InvalidEmail
        } else {
            SubmitOutcome::Sending
        };
        self.status.set_text(outcome.status());
        log::debug!("contact submit: {outcome:?}");

        if outcome == SubmitOutcome::Sending {
            let status = self.status.clone();
            let form = self.form.clone();
            self.scheduler.schedule_once(
                self.delay_ms,
                Box::new(move || {
                    status.set_text(STATUS_SENT);
                    form.reset();
                }),
            );
        }
        outcome
    }
}
