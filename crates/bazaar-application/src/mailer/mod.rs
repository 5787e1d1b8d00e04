//! Fire-and-forget email dispatch

/// HTML bodies for outbound email
pub mod templates;

use std::sync::Arc;

use bazaar_domain::{EmailMessage, EmailSender};
use tokio::task::JoinHandle;

/// Dispatches emails on background tasks
///
/// Delivery failures are logged at warn level and never propagate.
#[derive(Clone)]
pub struct Mailer {
    sender: Arc<dyn EmailSender>,
}

impl Mailer {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self { sender }
    }

    /// Queue a message for delivery and return immediately
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, message: EmailMessage) -> JoinHandle<()> {
        let sender = Arc::clone(&self.sender);
        tokio::spawn(async move {
            match sender.send(&message).await {
                Ok(()) => {
                    tracing::debug!(to = %message.to, subject = %message.subject, "email sent");
                }
                Err(e) => tracing::warn!(
                    to = %message.to,
                    subject = %message.subject,
                    error = %e,
                    "email delivery failed"
                ),
            }
        })
    }
}
