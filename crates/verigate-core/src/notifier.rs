//! Notifier trait — the seam between account registration and mail
//! delivery.

use crate::error::VerigateResult;

/// Delivers the verification message for a freshly registered account.
///
/// Implementations own their transport concerns (timeouts, TLS, retries).
/// The account lifecycle only observes success or failure and never rolls
/// back an account because delivery failed.
pub trait VerificationNotifier: Send + Sync {
    fn send_verification(
        &self,
        recipient: &str,
        username: &str,
        verification_link: &str,
    ) -> impl Future<Output = VerigateResult<()>> + Send;
}
