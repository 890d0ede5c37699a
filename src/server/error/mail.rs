use thiserror::Error;

/// Failures while handing a message to the mail provider.
///
/// These never reach an HTTP client directly: the notification dispatcher records
/// them on the outbox row and logs them.
#[derive(Error, Debug)]
pub enum MailError {
    /// Transport level failure (connection refused, timeout, TLS, ...).
    #[error("Mail provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Mail provider rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },
}
