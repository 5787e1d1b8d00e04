use async_trait::async_trait;
use bazaar_domain::error::Result;
use bazaar_domain::{EmailMessage, EmailSender};

/// Writes outbound email to the log instead of delivering it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            bytes = message.html.len(),
            "email (log provider)"
        );
        Ok(())
    }
}
