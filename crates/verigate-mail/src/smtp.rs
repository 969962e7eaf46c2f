//! SMTP notifier built on lettre's async transport.

use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use verigate_core::error::{VerigateError, VerigateResult};
use verigate_core::notifier::VerificationNotifier;

use crate::template;

/// Configuration for the SMTP relay.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay hostname (e.g., `smtp.gmail.com`).
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Sender shown in the `From` header, e.g. `VERIGATE <noreply@example.com>`.
    pub from_address: String,
    /// Transport timeout in seconds. The lifecycle service never waits
    /// longer than this on a delivery attempt.
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".into(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "VERIGATE <noreply@localhost>".into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("invalid mail address: {0}")]
    Address(String),

    #[error("failed to build message: {0}")]
    Message(String),
}

impl From<MailError> for VerigateError {
    fn from(err: MailError) -> Self {
        VerigateError::Notifier(err.to_string())
    }
}

/// Sends verification mail over an authenticated, TLS-protected SMTP
/// relay. The transport is built once and reused across deliveries.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotifier {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

impl VerificationNotifier for SmtpNotifier {
    async fn send_verification(
        &self,
        recipient: &str,
        username: &str,
        verification_link: &str,
    ) -> VerigateResult<()> {
        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| MailError::Address(format!("from address: {e}")))?,
            )
            .to(recipient
                .parse()
                .map_err(|e| MailError::Address(format!("to address: {e}")))?)
            .subject(template::verification_subject())
            .header(ContentType::TEXT_PLAIN)
            .body(template::verification_body(username, verification_link))
            .map_err(|e| MailError::Message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(MailError::from)?;

        tracing::info!(recipient, "verification mail sent");
        Ok(())
    }
}
