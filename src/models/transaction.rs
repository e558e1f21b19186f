//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a transaction
//! - `CreateTransactionRequest`: Request body for recording a transaction
//! - `TransactionResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{operation_type::OperationType, record::RecordMeta};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - References exactly one account
/// - Stores its operation type by numeric code
/// - Stores the signed amount (negative for withdrawals and purchases,
///   positive for payments)
///
/// Transactions are never updated once written.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Transaction {
    /// Identifier and creation timestamp
    #[sqlx(flatten)]
    pub meta: RecordMeta,

    /// Account the transaction was recorded against
    pub account_id: Uuid,

    /// Category of the transaction
    pub operation_type: OperationType,

    /// When the transaction happened
    pub event_date: DateTime<Utc>,

    /// Amount carrying the canonical sign of `operation_type`
    pub amount: Decimal,
}

impl Transaction {
    pub fn id(&self) -> Uuid {
        self.meta.id
    }
}

/// Request to record a transaction against an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "operation_type": 1,
///   "amount": "123.45"
/// }
/// ```
///
/// # Validation
///
/// - `account_id` must reference an existing account
/// - `operation_type` must be one of 1, 2, 3, 4
/// - `amount` is read as a magnitude; its sign is ignored
#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionRequest {
    pub account_id: Option<Uuid>,

    /// Read wider than the stored code so out-of-range integers still reach
    /// operation type resolution.
    pub operation_type: Option<i64>,

    pub amount: Option<Decimal>,
}

/// Response returned for transaction operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "operation_type": 1,
///   "amount": "-123.45",
///   "event_date": "2025-12-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub operation_type: i32,
    pub amount: Decimal,
    pub event_date: DateTime<Utc>,
}

/// Convert database Transaction to API TransactionResponse.
impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.meta.id,
            account_id: transaction.account_id,
            operation_type: transaction.operation_type.code(),
            amount: transaction.amount,
            event_date: transaction.event_date,
        }
    }
}
