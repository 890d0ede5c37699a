//! Cron jobs run alongside the HTTP server.

pub mod notification_retry;
