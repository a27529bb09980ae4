use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Reasons a registration attempt is turned down by the registration rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("This event is already full.")]
    EventFull,
    #[error("This email is already registered for this event.")]
    AlreadyRegistered,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Invalid JSON")]
    InvalidJson,
    #[error(transparent)]
    RuleViolation(#[from] RuleViolation),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Registration could not be processed.")]
    RegistrationFailed,
    #[error("{0}")]
    ConversionEntityError(String),
    #[error(transparent)]
    SpecificOperationError(sqlx::Error),
    #[error(transparent)]
    TransactionError(sqlx::Error),
}

impl AppError {
    /// Failures outside the documented taxonomy: store errors and broken
    /// invariants.
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            AppError::ConversionEntityError(_)
                | AppError::SpecificOperationError(_)
                | AppError::TransactionError(_)
        )
    }

    /// Replaces an unexpected failure with the fixed client-facing
    /// registration error. The raw cause is logged and dropped.
    pub fn into_registration_failure(self) -> AppError {
        if self.is_unexpected() {
            tracing::error!(
                error.cause_chain = ?self, error.message = %self,
                "registration failed unexpectedly"
            );
            AppError::RegistrationFailed
        } else {
            self
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::InvalidJson
            | AppError::RuleViolation(_)
            | AppError::RegistrationFailed => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ConversionEntityError(_)
            | AppError::SpecificOperationError(_)
            | AppError::TransactionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = if self.is_unexpected() {
            tracing::error!(
                error.cause_chain = ?self, error.message = %self,
                "Unexpected error happened"
            );
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
