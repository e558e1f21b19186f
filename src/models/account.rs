//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::record::RecordMeta;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Is identified by the document number of its holder
/// - Tracks how much credit is still available to spend
///
/// # Credit Limit Storage
///
/// The available credit limit is a `NUMERIC` column mapped to `Decimal`, so
/// additions and subtractions are exact.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    /// Identifier and creation timestamp
    #[sqlx(flatten)]
    pub meta: RecordMeta,

    /// Document number of the account holder
    pub document_number: String,

    /// Remaining credit the account may still spend or withdraw
    ///
    /// Not bounded below: transactions may drive it negative.
    pub available_credit_limit: Decimal,
}

impl Account {
    pub fn id(&self) -> Uuid {
        self.meta.id
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "document_number": "12345678900",
///   "available_credit_limit": "5000.00"
/// }
/// ```
///
/// # Validation
///
/// Both fields are optional at the JSON level; the account service rejects
/// a blank document number or a missing limit with a specific error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    pub document_number: Option<String>,

    pub available_credit_limit: Option<Decimal>,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "document_number": "12345678900",
///   "available_credit_limit": "5000.00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: Uuid,

    /// Document number of the account holder
    pub document_number: String,

    /// Remaining credit, serialized as a decimal string
    pub available_credit_limit: Decimal,
}

/// Convert database Account to API AccountResponse.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.meta.id,
            document_number: account.document_number,
            available_credit_limit: account.available_credit_limit,
        }
    }
}
