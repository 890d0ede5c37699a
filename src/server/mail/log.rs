use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::server::{
    error::mail::MailError,
    mail::{MailMessage, Mailer},
};

/// Mailer that writes messages to the log instead of sending them.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        tracing::info!(
            "Mail to {} with subject \"{}\" ({} bytes of HTML)",
            message.to,
            message.subject,
            message.html.len()
        );
        Ok(())
    }
}
