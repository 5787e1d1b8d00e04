//! Outbound email adapters

mod http_sender;
mod log_sender;

pub use http_sender::HttpEmailSender;
pub use log_sender::LogEmailSender;
