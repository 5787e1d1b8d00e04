use bazaar_domain::{EmailMessage, NotificationKind};

/// Product name used in subjects and signatures
pub const BRAND: &str = "Bazaar";

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn signature() -> String {
    format!("<br><p>Best regards,</p><p>The {BRAND} Team</p>")
}

/// Welcome email sent after registration
pub fn welcome(to: &str, first_name: &str) -> EmailMessage {
    let body = format!(
        "<h2>Welcome to {BRAND}!</h2>\
         <p>Hi {name},</p>\
         <p>Your account has been created successfully.</p>\
         <p>You can now log in and start booking services.</p>{sig}",
        name = escape_html(first_name),
        sig = signature(),
    );
    EmailMessage::new(to, format!("Welcome to {BRAND}!"), body)
}

/// Password reset email carrying a one-hour link
pub fn password_reset(to: &str, first_name: &str, link: &str) -> EmailMessage {
    let body = format!(
        "<h2>Password Reset Request</h2>\
         <p>Hi {name},</p>\
         <p>You requested a password reset for your {BRAND} account.</p>\
         <p><a href=\"{link}\">Reset Password</a></p>\
         <p>This link will expire in 1 hour.</p>\
         <p>If you didn't request this reset, please ignore this email.</p>{sig}",
        name = escape_html(first_name),
        link = escape_html(link),
        sig = signature(),
    );
    EmailMessage::new(to, format!("Password Reset Request - {BRAND}"), body)
}

/// Booking notification
pub fn notification(
    to: &str,
    first_name: &str,
    kind: NotificationKind,
    message: &str,
) -> EmailMessage {
    let lead = match kind {
        NotificationKind::BookingRequest => "You have received a new booking request.",
        NotificationKind::BookingConfirmed => "Your booking has been confirmed!",
        NotificationKind::BookingCompleted => "Your service has been completed!",
        NotificationKind::Other => "You have a new notification.",
    };
    let body = format!(
        "<h2>{title}</h2>\
         <p>Hi {name},</p>\
         <p>{lead}</p>\
         <p><strong>Details:</strong> {details}</p>{sig}",
        title = kind.subject(),
        name = escape_html(first_name),
        details = escape_html(message),
        sig = signature(),
    );
    EmailMessage::new(to, format!("{} - {BRAND}", kind.subject()), body)
}
