//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Validation Errors**: Client input rejected by the services
/// - **Resource Errors**: Requested resources not found by a lookup endpoint
/// - **Database Errors**: Any sqlx::Error from database operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Document number missing on account creation, or the account referenced
    /// by a transaction does not exist.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Account invalid or not found")]
    InvalidAccount,

    /// Available credit limit missing on account creation.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Available limit credit invalid or not found")]
    InvalidAvailableLimitCredit,

    /// Operation type code absent or outside 1..=4.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Operation type is invalid")]
    InvalidOperationType,

    /// Transaction amount missing.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Amount invalid or not found")]
    InvalidAmount,

    /// Applying a transaction would push the available credit limit outside
    /// the representable decimal range.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Available credit limit out of range")]
    LimitOverflow,

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Requested transaction does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    TransactionNotFound,
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// `Database` errors are logged and answered with a generic 500 so that
/// driver details never reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidAccount => (StatusCode::BAD_REQUEST, "invalid_account"),
            AppError::InvalidAvailableLimitCredit => {
                (StatusCode::BAD_REQUEST, "invalid_available_limit_credit")
            }
            AppError::InvalidOperationType => (StatusCode::BAD_REQUEST, "invalid_operation_type"),
            AppError::InvalidAmount => (StatusCode::BAD_REQUEST, "invalid_amount"),
            AppError::LimitOverflow => (StatusCode::BAD_REQUEST, "limit_overflow"),
            AppError::AccountNotFound => (StatusCode::NOT_FOUND, "account_not_found"),
            AppError::TransactionNotFound => (StatusCode::NOT_FOUND, "transaction_not_found"),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let message = match self {
            AppError::Database(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
