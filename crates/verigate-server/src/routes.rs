//! Route table.

use axum::Router;
use axum::routing::{get, post};
use verigate_core::notifier::VerificationNotifier;
use verigate_core::repository::AccountRepository;

use crate::handlers;
use crate::state::AppState;

pub fn router<R, N>(state: AppState<R, N>) -> Router
where
    R: AccountRepository + 'static,
    N: VerificationNotifier + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R, N>))
        .route("/login", post(handlers::login::<R, N>))
        .route("/verify-email", get(handlers::verify_email::<R, N>))
        .route("/me", get(handlers::account_info::<R, N>))
        .with_state(state)
}
