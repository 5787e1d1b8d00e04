//! Outbound email value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rendered email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// Category of a user notification, selects the email subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum NotificationKind {
    BookingRequest,
    BookingConfirmed,
    BookingCompleted,
    Other,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BookingRequest => "booking_request",
            Self::BookingConfirmed => "booking_confirmed",
            Self::BookingCompleted => "booking_completed",
            Self::Other => "other",
        }
    }

    /// Subject line for this kind
    pub fn subject(self) -> &'static str {
        match self {
            Self::BookingRequest => "New Booking Request",
            Self::BookingConfirmed => "Booking Confirmed",
            Self::BookingCompleted => "Service Completed",
            Self::Other => "Notification",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NotificationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "booking_request" => Self::BookingRequest,
            "booking_confirmed" => Self::BookingConfirmed,
            "booking_completed" => Self::BookingCompleted,
            _ => Self::Other,
        }
    }
}

impl From<NotificationKind> for &'static str {
    fn from(kind: NotificationKind) -> Self {
        kind.as_str()
    }
}
