mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    config::Config, error::AppError, router, scheduler::notification_retry, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let mailer = startup::build_mailer(&config, http_client);
    let cors = startup::cors_layer(&config)?;

    let _scheduler = notification_retry::start_scheduler(
        db.clone(),
        mailer.clone(),
        &config.notification_retry_cron,
    )
    .await?;

    let app = router::routes()
        .with_state(AppState::new(db, mailer))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
