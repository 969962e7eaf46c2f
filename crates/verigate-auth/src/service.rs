//! Account lifecycle service — registration, verification, login, and
//! account-info orchestration.

use uuid::Uuid;
use verigate_core::error::{VerigateError, VerigateResult};
use verigate_core::models::account::{AccountInfo, CreateAccount};
use verigate_core::notifier::VerificationNotifier;
use verigate_core::repository::AccountRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;
use crate::verification;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful registration result.
///
/// Carries only the account's public identity fields — never the password
/// hash or the verification token.
#[derive(Debug)]
pub struct RegisterOutput {
    pub account: AccountInfo,
    /// `false` when the verification mail could not be delivered. The
    /// account is durably created either way.
    pub verification_mail_sent: bool,
}

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token.
    pub session_token: String,
    /// Session token lifetime in seconds.
    pub expires_in: u64,
}

/// Account lifecycle service.
///
/// Generic over the repository and notifier implementations so that the
/// auth layer has no dependency on the database or mail crates.
pub struct AccountService<R: AccountRepository, N: VerificationNotifier> {
    repo: R,
    notifier: N,
    config: AuthConfig,
}

impl<R: AccountRepository, N: VerificationNotifier> AccountService<R, N> {
    pub fn new(repo: R, notifier: N, config: AuthConfig) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    /// Register a new account.
    ///
    /// The account is created unverified, carrying a fresh single-use
    /// verification token, and the notifier is handed the verification
    /// link. A notifier failure is logged and reported through
    /// [`RegisterOutput::verification_mail_sent`] but does not roll back
    /// the created account.
    pub async fn register(&self, input: RegisterInput) -> VerigateResult<RegisterOutput> {
        validate_username(&input.username)?;
        validate_email(&input.email)?;
        if input.password.len() < self.config.min_password_length {
            return Err(VerigateError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let password_hash =
            password::hash_password(&input.password, self.config.pepper.as_deref())
                .map_err(VerigateError::from)?;
        let verification_token = verification::generate_verification_token();

        // Uniqueness is enforced by the store; a duplicate surfaces as
        // AlreadyExists without revealing which field collided.
        let account = self
            .repo
            .create(CreateAccount {
                username: input.username,
                email: input.email,
                password_hash,
                verification_token: verification_token.clone(),
            })
            .await?;

        let link = format!(
            "{}/verify-email?token={}",
            self.config.base_url.trim_end_matches('/'),
            verification_token
        );

        let verification_mail_sent = match self
            .notifier
            .send_verification(&account.email, &account.username, &link)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    account_id = %account.id,
                    error = %e,
                    "verification mail delivery failed; account remains unverified"
                );
                false
            }
        };

        Ok(RegisterOutput {
            account: account.into(),
            verification_mail_sent,
        })
    }

    /// Consume a verification token and transition the account to
    /// verified.
    ///
    /// An unknown token and an already-consumed token both fail with
    /// `NotFound` — the caller cannot distinguish them.
    pub async fn verify_email(&self, token: &str) -> VerigateResult<()> {
        if token.is_empty() {
            return Err(VerigateError::Validation {
                message: "missing verification token".into(),
            });
        }

        let account = self
            .repo
            .get_by_verification_token(token)
            .await
            .map_err(|e| match e {
                VerigateError::NotFound { .. } => VerigateError::NotFound {
                    entity: "verification token".into(),
                    id: token.into(),
                },
                other => other,
            })?;
        self.repo.mark_verified(account.id).await
    }

    /// Authenticate with email + password and issue a session token.
    ///
    /// An unknown email and a wrong password produce the same error, so a
    /// caller cannot probe which addresses have accounts. An unverified
    /// account is rejected distinctly, regardless of password correctness.
    pub async fn login(&self, input: LoginInput) -> VerigateResult<LoginOutput> {
        let account = match self.repo.get_by_email(&input.email).await {
            Ok(a) => a,
            Err(VerigateError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !account.verified {
            return Err(AuthError::AccountNotVerified.into());
        }

        let valid = password::verify_password(
            &input.password,
            &account.password_hash,
            self.config.pepper.as_deref(),
        )
        .map_err(VerigateError::from)?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let session_token = token::issue_session_token(account.id, &account.username, &self.config)
            .map_err(VerigateError::from)?;

        Ok(LoginOutput {
            session_token,
            expires_in: self.config.session_token_lifetime_secs,
        })
    }

    /// Validate a presented session token and return the public view of
    /// the account it identifies.
    pub async fn account_info(&self, bearer_token: &str) -> VerigateResult<AccountInfo> {
        let claims =
            token::verify_session_token(bearer_token, &self.config).map_err(VerigateError::from)?;

        let account_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AuthError::TokenInvalid("malformed subject claim".into()))?;

        let account = self.repo.get_by_id(account_id).await?;
        Ok(account.into())
    }
}

/// Usernames must be 3–30 characters, start with a letter, and contain
/// only letters, digits, and underscores.
fn validate_username(username: &str) -> VerigateResult<()> {
    let valid = username.len() >= 3
        && username.len() <= 30
        && username
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(VerigateError::Validation {
            message: "username must be 3-30 chars, start with a letter, and contain \
                      only letters, numbers, and underscores"
                .into(),
        })
    }
}

fn validate_email(email: &str) -> VerigateResult<()> {
    if email.contains('@') && !email.starts_with('@') && !email.ends_with('@') {
        Ok(())
    } else {
        Err(VerigateError::Validation {
            message: "invalid email address".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a_1").is_ok());
        assert!(validate_username("ab").is_err()); // too short
        assert!(validate_username("1alice").is_err()); // starts with digit
        assert!(validate_username("al ice").is_err()); // space
        assert!(validate_username(&"a".repeat(31)).is_err()); // too long
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@").is_err());
    }
}
