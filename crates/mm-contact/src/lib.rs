//! Contact form state machine.
//!
//! Holds the four field values, guards against double submission and
//! drives submissions through the ERPNext gateway. UI-framework agnostic;
//! a frontend binds its inputs to the field strings and calls
//! [`ContactForm::submit`].

pub(crate) mod form;
pub(crate) mod outcome;


pub use form::ContactForm;
pub use outcome::{INVALID_NOTIFICATION, SUCCESS_NOTIFICATION, SubmitOutcome};
