use std::{sync::Arc, time::Duration};

use axum::http::{HeaderValue, Method};
use dioxus_logger::tracing;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    mail::{http::HttpMailer, log::LogMailer, Mailer},
};

/// Timeout applied to every outgoing HTTP request, mail provider included.
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outgoing requests.
///
/// Redirects are disabled so a misconfigured mail endpoint cannot bounce requests,
/// and the bearer token with them, to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?)
}

/// Picks the mail transport from configuration.
///
/// Uses the HTTP mail provider when `MAIL_API_URL` is set, otherwise falls back to
/// logging messages so development setups work without a provider.
pub fn build_mailer(config: &Config, client: reqwest::Client) -> Arc<dyn Mailer> {
    match &config.mail_api_url {
        Some(api_url) => {
            tracing::info!("Sending mails through {}", api_url);
            Arc::new(HttpMailer::new(
                client,
                api_url.clone(),
                config.mail_api_token.clone(),
                config.mail_from.clone(),
            ))
        }
        None => {
            tracing::warn!("MAIL_API_URL is not set, mails will only be logged");
            Arc::new(LogMailer)
        }
    }
}

/// Builds the CORS layer allowing the admin dashboard to call the API.
///
/// Without a configured origin no cross-origin request is allowed.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(layer);
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(layer.allow_origin(origin))
}
