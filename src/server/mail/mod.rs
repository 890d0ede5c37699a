//! Outgoing mail.
//!
//! `Mailer` is the seam between the notification dispatcher and whatever actually
//! delivers messages. `HttpMailer` posts to a transactional mail API, `LogMailer`
//! only logs and is used when no provider is configured.

pub mod http;
pub mod log;


use async_trait::async_trait;

use crate::server::error::mail::MailError;

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Delivers one message. An `Ok` means the provider accepted it.
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}
