//! Mail provider client.
//!
//! Posts messages as JSON to a transactional mail API:
//!
//! ```json
//! { "from": "...", "to": "...", "subject": "...", "html": "..." }
//! ```
//!
//! Any 2xx answer counts as accepted. Other statuses are reported as
//! `MailError::Rejected` with the response body.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::{
    error::mail::MailError,
    mail::{MailMessage, Mailer},
};

#[derive(Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
    from: String,
}

impl HttpMailer {
    /// Creates a mailer posting to `api_url`.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client (timeouts and redirect policy are set at startup)
    /// - `api_url` - Full URL of the provider's send endpoint
    /// - `api_token` - Bearer token, if the provider requires one
    /// - `from` - Sender address
    pub fn new(
        client: reqwest::Client,
        api_url: String,
        api_token: Option<String>,
        from: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_token,
            from,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let mut request = self.client.post(&self.api_url).json(&OutgoingMail {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
