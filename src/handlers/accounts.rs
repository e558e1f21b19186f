//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/{id} - Get account by ID

use crate::{
    app::AppState,
    error::AppError,
    models::account::{AccountResponse, CreateAccountRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Create a new account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "document_number": "12345678900",
///   "available_credit_limit": "5000.00"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: `invalid_account` when the document number is missing
///   or blank, `invalid_available_limit_credit` when the limit is missing
/// - **Error (500)**: Database error
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "document_number": "12345678900",
///   "available_credit_limit": "5000.00"
/// }
/// ```
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let account = state.accounts.create(request).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get a specific account by ID.
///
/// # URL Parameters
///
/// - `id` - UUID of the account to retrieve
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state
        .accounts
        .find(account_id)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account))
}
