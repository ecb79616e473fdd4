use mm_erpnext::{ErpNextError, SUBMIT_FALLBACK_NOTIFICATION};

/// Notification text shown after a successful submission.
pub const SUCCESS_NOTIFICATION: &str =
    "Vielen Dank für Ihre Nachricht. Wir werden den Dialog in Kürze aufnehmen.";

/// Notification text when the fields do not pass the validation gate.
/// One generic string; the form reports no per-field detail.
pub const INVALID_NOTIFICATION: &str = "Bitte füllen Sie alle Pflichtfelder korrekt aus.";

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The lead was accepted; the form has been cleared.
    Accepted,
    /// The gateway call failed; the form keeps its values so the visitor
    /// can retry.
    Failed { notification: String },
    /// The field values never left the site; no lead could be built from
    /// them.
    Invalid,
    /// A submission was already running; this attempt was dropped.
    InFlight,
}

impl SubmitOutcome {
    /// The notification to surface, if the outcome carries one. Always a
    /// product string; validation detail stays in the log.
    pub fn notification(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Accepted => Some(SUCCESS_NOTIFICATION),
            SubmitOutcome::Failed { notification } => Some(notification),
            SubmitOutcome::Invalid => Some(INVALID_NOTIFICATION),
            SubmitOutcome::InFlight => None,
        }
    }
}

/// Visitor-facing text for a failed gateway call. Rejections carry the
/// server's own message; every other error collapses to the fixed fallback
/// so no transport detail leaks into the page.
pub(crate) fn failure_notification(error: &ErpNextError) -> String {
    match error {
        ErpNextError::Rejected { message, .. } => message.clone(),
        _ => SUBMIT_FALLBACK_NOTIFICATION.to_string(),
    }
}
