//! Account domain model.
//!
//! An account moves through exactly one lifecycle transition: it is created
//! unverified with a single-use verification token, and becomes verified
//! when that token is consumed. No path leads back to unverified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Globally unique; immutable after creation (no rename flow).
    pub username: String,
    /// Globally unique.
    pub email: String,
    /// Argon2id PHC-format digest. Never the plaintext.
    pub password_hash: String,
    pub verified: bool,
    /// Present iff `verified == false` and the token has not been consumed.
    /// Cleared permanently on verification.
    pub verification_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new account.
///
/// The password arrives already hashed and the verification token already
/// generated — both are produced by the auth layer, so the repository never
/// sees a plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub verification_token: String,
}

/// Public projection of an account.
///
/// Deliberately has no password-hash or verification-token field, so
/// neither can leak through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountInfo {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            verified: account.verified,
            created_at: account.created_at,
        }
    }
}
