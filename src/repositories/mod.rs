//! Persistence collaborators for accounts and transactions.
//!
//! Services depend on these traits rather than on a concrete store, so the
//! same business logic runs against PostgreSQL in production and against the
//! in-memory implementations in tests or when no database is configured.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{account::Account, transaction::Transaction},
};

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryAccountRepository, InMemoryTransactionRepository};
pub use postgres::{PgAccountRepository, PgTransactionRepository};

/// Storage for `Account` records.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return it as stored.
    async fn create(&self, account: &Account) -> Result<Account, AppError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError>;

    /// Persist changes to an existing account and return it as stored.
    ///
    /// Returns `AccountNotFound` if no row matches the account's id.
    async fn save(&self, account: &Account) -> Result<Account, AppError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Storage for `Transaction` records. Transactions are append-only.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Insert a new transaction and return it as stored.
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError>;

    /// Fetch a transaction by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, AppError>;
}
