//! Email delivery through a JSON HTTP API

use std::time::Duration;

use async_trait::async_trait;
use bazaar_domain::error::{Error, Result};
use bazaar_domain::{EmailMessage, EmailSender};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::constants::EMAIL_HTTP_TIMEOUT_SECS;
use crate::error_ext::ErrorContext;

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Posts each message as `{from, to, subject, html}` to a configured endpoint
#[derive(Debug, Clone)]
pub struct HttpEmailSender {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    from: String,
}

impl HttpEmailSender {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::configuration("Email endpoint is required for the http provider"))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(EMAIL_HTTP_TIMEOUT_SECS))
            .build()
            .config_context("Failed to build email HTTP client")?;
        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let body = SendRequest {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        };
        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        request
            .send()
            .await
            .email_context("Email API request failed")?
            .error_for_status()
            .email_context("Email API rejected the message")?;
        Ok(())
    }
}
