mod config;
mod credentials;
mod error;

pub use config::Config;
pub use credentials::ApiCredentials;
pub use error::{ConfigError, ConfigErrorResult};

const DEFAULT_API_URL: &str = "http://100.78.117.19:8090";

#[cfg(test)]
mod tests;
