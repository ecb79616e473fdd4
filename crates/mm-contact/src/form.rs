use crate::outcome::{self, SubmitOutcome};

use mm_core::Lead;
use mm_erpnext::ErpNextClient;

use log::{error, info, warn};

/// State behind the contact form.
///
/// The field strings are public so a frontend can bind inputs directly;
/// the in-flight flag is not, it only changes through [`ContactForm::submit`].
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub(crate) submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form with the message field prefilled, e.g. from a
    /// project inquiry link.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Overwrite the message field unless the given text is empty.
    pub fn prefill_message(&mut self, message: &str) {
        if !message.is_empty() {
            self.message = message.to_string();
        }
    }

    /// Whether a submission is currently running.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The message as transmitted: the phone number, when given, is folded
    /// into the text since no structured phone field exists downstream.
    pub fn outgoing_message(&self) -> String {
        if self.phone.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n\nTelefon: {}", self.message, self.phone)
        }
    }

    /// Drive one submission through the gateway.
    ///
    /// The required fields are checked before the phone number is folded
    /// into the message; an invalid form never reaches the gateway.
    /// Re-entrant calls while a submission is running are dropped. On
    /// success the form is cleared; on failure it keeps its values so the
    /// visitor can retry.
    pub async fn submit(&mut self, client: &ErpNextClient) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        // The gate runs on the raw message; the phone fold happens after,
        // so an empty message with a phone number still fails the gate.
        if self.message.is_empty() {
            warn!("Submission rejected: message is empty");
            return SubmitOutcome::Invalid;
        }

        let lead = match Lead::new(
            self.name.clone(),
            self.email.clone(),
            self.outgoing_message(),
        ) {
            Ok(lead) => lead,
            Err(err) => {
                warn!("Submission rejected: {err}");
                return SubmitOutcome::Invalid;
            }
        };

        // The guard resets the flag however the call ends, including when
        // the future is dropped mid-flight.
        let result = {
            let _in_flight = InFlightGuard::arm(&mut self.submitting);
            client.create_lead(&lead).await
        };

        match result {
            Ok(_) => {
                info!("Lead submitted");
                self.clear();
                SubmitOutcome::Accepted
            }
            Err(err) => {
                error!("Lead submission failed: {err}");
                SubmitOutcome::Failed {
                    notification: outcome::failure_notification(&err),
                }
            }
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }
}

/// Sets the in-flight flag on arm, resets it on drop.
struct InFlightGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> InFlightGuard<'a> {
    fn arm(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
