//! Shared application state.

use std::sync::Arc;

use verigate_auth::AccountService;
use verigate_core::notifier::VerificationNotifier;
use verigate_core::repository::AccountRepository;

/// State handed to every request handler.
pub struct AppState<R: AccountRepository, N: VerificationNotifier> {
    pub service: Arc<AccountService<R, N>>,
}

impl<R: AccountRepository, N: VerificationNotifier> AppState<R, N> {
    pub fn new(service: AccountService<R, N>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// Manual impl: deriving Clone would demand R: Clone and N: Clone, but the
// service is behind an Arc.
impl<R: AccountRepository, N: VerificationNotifier> Clone for AppState<R, N> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
