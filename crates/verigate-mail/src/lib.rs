//! VERIGATE Mail — SMTP delivery of verification messages.

mod smtp;
pub mod template;

pub use smtp::{MailConfig, MailError, SmtpNotifier};
