//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use verigate_core::error::VerigateError;

/// An error ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "authentication required")
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Default mapping for the unauthenticated endpoints (register, login,
/// verify-email). `/me` applies its own 401/403 split in the handler.
impl From<VerigateError> for ApiError {
    fn from(err: VerigateError) -> Self {
        match err {
            VerigateError::Validation { message } => Self::new(StatusCode::BAD_REQUEST, message),
            // Deliberately silent on whether username or email collided.
            VerigateError::AlreadyExists { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "account already exists")
            }
            VerigateError::AuthenticationFailed { reason } => {
                Self::new(StatusCode::BAD_REQUEST, reason)
            }
            VerigateError::NotFound { entity, .. } => {
                Self::new(StatusCode::BAD_REQUEST, format!("{entity} not found"))
            }
            VerigateError::Database(_)
            | VerigateError::Notifier(_)
            | VerigateError::Crypto(_)
            | VerigateError::Internal(_) => {
                tracing::error!(error = %err, "internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}
