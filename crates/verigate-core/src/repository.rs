//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Lookups for absent records fail
//! with [`VerigateError::NotFound`] rather than returning `Option`.

use uuid::Uuid;

use crate::error::VerigateResult;
use crate::models::account::{Account, CreateAccount};

pub trait AccountRepository: Send + Sync {
    /// Insert a new account in the unverified state.
    ///
    /// Fails with [`VerigateError::AlreadyExists`] if the username or email
    /// collides with an existing account. Uniqueness must be enforced by a
    /// storage-layer constraint so that two concurrent identical creates
    /// cannot both succeed.
    ///
    /// [`VerigateError::AlreadyExists`]: crate::error::VerigateError::AlreadyExists
    fn create(&self, input: CreateAccount) -> impl Future<Output = VerigateResult<Account>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = VerigateResult<Account>> + Send;

    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = VerigateResult<Account>> + Send;

    fn get_by_email(&self, email: &str) -> impl Future<Output = VerigateResult<Account>> + Send;

    /// Look up the account carrying an unconsumed verification token.
    ///
    /// `NotFound` covers both "never existed" and "already consumed"; the
    /// two cases must stay indistinguishable to callers.
    fn get_by_verification_token(
        &self,
        token: &str,
    ) -> impl Future<Output = VerigateResult<Account>> + Send;

    /// Transition an account to verified and clear its verification token
    /// in a single statement.
    fn mark_verified(&self, id: Uuid) -> impl Future<Output = VerigateResult<()>> + Send;
}
