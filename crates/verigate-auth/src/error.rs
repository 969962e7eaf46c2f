//! Authentication error types.

use thiserror::Error;
use verigate_core::error::VerigateError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email not verified")]
    AccountNotVerified,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for VerigateError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::AccountNotVerified
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => VerigateError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => VerigateError::Crypto(msg),
        }
    }
}
