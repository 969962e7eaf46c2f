//! Request handlers for the account endpoints.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use serde::{Deserialize, Serialize};
use verigate_auth::service::{LoginInput, RegisterInput};
use verigate_core::error::VerigateError;
use verigate_core::models::account::AccountInfo;
use verigate_core::notifier::VerificationNotifier;
use verigate_core::repository::AccountRepository;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub account: AccountInfo,
    /// `false` when the verification mail could not be delivered; the
    /// account exists either way and the token can be re-requested
    /// out of band.
    pub verification_mail_sent: bool,
}

/// POST /register
pub async fn register<R: AccountRepository, N: VerificationNotifier>(
    State(state): State<AppState<R, N>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    tracing::info!(username = %request.username, "registration request");

    let out = state
        .service
        .register(RegisterInput {
            username: request.username,
            email: request.email,
            password: request.password,
        })
        .await?;

    let message = if out.verification_mail_sent {
        "registration complete; check your email to verify the account"
    } else {
        "registration complete, but the verification mail could not be sent"
    };

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: message.into(),
            account: out.account,
            verification_mail_sent: out.verification_mail_sent,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

/// POST /login
pub async fn login<R: AccountRepository, N: VerificationNotifier>(
    State(state): State<AppState<R, N>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let out = state
        .service
        .login(LoginInput {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: out.session_token,
        expires_in: out.expires_in,
    }))
}

#[derive(Debug, Deserialize)]
pub struct VerifyEmailParams {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /verify-email?token=
pub async fn verify_email<R: AccountRepository, N: VerificationNotifier>(
    State(state): State<AppState<R, N>>,
    Query(params): Query<VerifyEmailParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = params.token.ok_or_else(|| {
        ApiError::new(StatusCode::BAD_REQUEST, "missing verification token")
    })?;

    state.service.verify_email(&token).await?;

    Ok(Json(MessageResponse {
        message: "email verified; you can now log in".into(),
    }))
}

/// GET /me
///
/// A missing or non-Bearer Authorization header is 401; a presented token
/// that fails verification for any reason (expired, bad signature,
/// malformed, unknown subject) is 403.
pub async fn account_info<R: AccountRepository, N: VerificationNotifier>(
    State(state): State<AppState<R, N>>,
    headers: HeaderMap,
) -> Result<Json<AccountInfo>, ApiError> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(ApiError::unauthenticated)?;

    let info = state
        .service
        .account_info(bearer)
        .await
        .map_err(|e| match e {
            VerigateError::AuthenticationFailed { reason } => ApiError::forbidden(reason),
            VerigateError::NotFound { .. } => ApiError::forbidden("unknown account"),
            other => ApiError::from(other),
        })?;

    Ok(Json(info))
}
