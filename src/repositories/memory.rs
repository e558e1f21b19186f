//! In-memory repositories.
//!
//! Used when no `DATABASE_URL` is configured and as substitutes for
//! PostgreSQL in tests. Records live in a `HashMap` behind a tokio `RwLock`
//! and disappear when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AccountRepository, TransactionRepository};
use crate::{
    error::AppError,
    models::{account::Account, transaction::Transaction},
};

#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> Result<Account, AppError> {
        self.accounts
            .write()
            .await
            .insert(account.id(), account.clone());
        Ok(account.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn save(&self, account: &Account) -> Result<Account, AppError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.id())
            .ok_or(AppError::AccountNotFound)?;
        *stored = account.clone();
        Ok(account.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<HashMap<Uuid, Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        self.transactions
            .write()
            .await
            .insert(transaction.id(), transaction.clone());
        Ok(transaction.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, AppError> {
        Ok(self.transactions.read().await.get(&id).cloned())
    }
}
