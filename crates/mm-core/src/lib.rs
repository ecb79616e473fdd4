pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::lead::Lead;
pub use models::project::GalleryProject;

#[cfg(test)]
mod tests;
