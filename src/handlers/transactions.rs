//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /api/v1/transactions - Record a transaction against an account
//! - GET /api/v1/transactions/{id} - Get transaction details

use crate::{
    app::AppState,
    error::AppError,
    models::transaction::{CreateTransactionRequest, TransactionResponse},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Record a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "550e8400-...",
///   "operation_type": 4,
///   "amount": "123.45"
/// }
/// ```
///
/// The amount's sign is ignored: operation types 1, 2 and 3 are stored
/// negative, 4 (payment) positive.
///
/// # Response (201)
///
/// ```json
/// {
///   "id": "770e8400-...",
///   "account_id": "550e8400-...",
///   "operation_type": 4,
///   "amount": "123.45",
///   "event_date": "2025-12-21T16:00:00Z"
/// }
/// ```
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let transaction = state.transactions.create(request).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get transaction by ID.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state
        .transactions
        .find(transaction_id)
        .await?
        .ok_or(AppError::TransactionNotFound)?;

    Ok(Json(transaction))
}
