//! Thin client for the ERPNext instance backing the site.
//!
//! Two operations: listing projects for the gallery and creating a lead
//! from the contact form. Both authenticate with the configured key/secret
//! pair; they degrade differently when that pair is missing (see
//! [`ErpNextClient`]).

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod resources;


pub use client::ErpNextClient;
pub use error::{ErpNextError, Result as ErpNextResult};
pub use resources::SUBMIT_FALLBACK_NOTIFICATION;
