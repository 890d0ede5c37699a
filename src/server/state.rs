//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. Both fields are cheap to clone: `DatabaseConnection` is a
//! pool handle and the mailer is reference counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::mail::Mailer;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Mail transport used to notify students of their training results.
    ///
    /// Handlers hand a clone to the notification dispatcher running on a spawned
    /// task, so it must outlive the request.
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Mail transport chosen from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>) -> Self {
        Self { db, mailer }
    }
}
