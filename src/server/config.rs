use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Every five minutes, at second zero.
const DEFAULT_NOTIFICATION_RETRY_CRON: &str = "0 */5 * * * *";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Origin of the admin dashboard allowed to call the API from a browser.
    pub cors_allowed_origin: Option<String>,

    /// Transactional mail API endpoint. Mails are only logged when absent.
    pub mail_api_url: Option<String>,
    pub mail_api_token: Option<String>,
    pub mail_from: String,

    pub notification_retry_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_bind_address(
                optional_var("BIND_ADDRESS").as_deref().unwrap_or(DEFAULT_BIND_ADDRESS),
            )?,
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
            mail_api_url: optional_var("MAIL_API_URL"),
            mail_api_token: optional_var("MAIL_API_TOKEN"),
            mail_from: optional_var("MAIL_FROM")
                .unwrap_or_else(|| "noreply@autoecole.local".to_string()),
            notification_retry_cron: optional_var("NOTIFICATION_RETRY_CRON")
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_RETRY_CRON.to_string()),
        })
    }
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
            name: "BIND_ADDRESS".to_string(),
            reason: e.to_string(),
        })
}
