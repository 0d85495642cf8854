//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Registration API                   │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │                                                                         │
//! │  Bad JSON body ─────────── JsonRejection ──────┐                       │
//! │  ValidationError ─── (CPF, email, ...) ────────┤──► 400 {"error": msg} │
//! │  AddressError ────── (CEP, mismatch, ...) ─────┘                       │
//! │                                                                         │
//! │  DbError ─── logged with detail ───────────────────► 500 {"error":     │
//! │                                                      "Erro ao          │
//! │                                                       cadastrar dados."}│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use cadastro_address::AddressError;
use cadastro_core::ValidationError;
use cadastro_db::DbError;

/// Message returned for any persistence failure.
pub const PERSISTENCE_FAILED: &str = "Erro ao cadastrar dados.";

/// Message returned when the request body cannot be parsed.
pub const INVALID_BODY: &str = "Corpo da requisição inválido.";

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// 400 with a client-facing message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// 500 with a client-facing message.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
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

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::bad_request(INVALID_BODY)
    }
}

/// Database detail is logged, never sent to the client.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, transient = err.is_transient(), "Registration insert failed");
        ApiError::internal(PERSISTENCE_FAILED)
    }
}
