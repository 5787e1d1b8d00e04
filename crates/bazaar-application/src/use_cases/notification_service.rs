//! Notification Use Case
//!
//! Sends booking notifications to a user by id.

use std::sync::Arc;

use bazaar_domain::{Error, NotificationKind, Result, UserId, UserRepository};

use crate::mailer::{Mailer, templates};

/// Booking notification emails
#[derive(Clone)]
pub struct NotificationService {
    users: Arc<dyn UserRepository>,
    mailer: Mailer,
}

impl NotificationService {
    pub fn new(users: Arc<dyn UserRepository>, mailer: Mailer) -> Self {
        Self { users, mailer }
    }

    /// Queue a notification for `user_id`
    ///
    /// Fails only if the user cannot be found; delivery itself happens in
    /// the background and is never reported back.
    pub async fn notify(&self, user_id: UserId, kind: NotificationKind, message: &str) -> Result<()> {
        let user = self
            .users
            .find_profile(user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {user_id}")))?;

        tracing::debug!(user_id, kind = %kind, "queueing notification");
        self.mailer.dispatch(templates::notification(
            &user.email,
            user.display_name(),
            kind,
            message,
        ));
        Ok(())
    }
}
