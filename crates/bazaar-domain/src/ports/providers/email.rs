//! Email Delivery Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::EmailMessage;

/// Outbound email delivery
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}
