//! PostgreSQL-backed repositories.

use async_trait::async_trait;
use uuid::Uuid;

use super::{AccountRepository, TransactionRepository};
use crate::{
    db::DbPool,
    error::AppError,
    models::{account::Account, transaction::Transaction},
};

/// Accounts stored in the `accounts` table.
#[derive(Debug, Clone)]
pub struct PgAccountRepository {
    pool: DbPool,
}

impl PgAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, document_number, available_credit_limit, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at, document_number, available_credit_limit
            "#,
        )
        .bind(account.meta.id)
        .bind(&account.document_number)
        .bind(account.available_credit_limit)
        .bind(account.meta.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, created_at, document_number, available_credit_limit
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn save(&self, account: &Account) -> Result<Account, AppError> {
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET document_number = $2,
                available_credit_limit = $3
            WHERE id = $1
            RETURNING id, created_at, document_number, available_credit_limit
            "#,
        )
        .bind(account.meta.id)
        .bind(&account.document_number)
        .bind(account.available_credit_limit)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Transactions stored in the `transactions` table.
#[derive(Debug, Clone)]
pub struct PgTransactionRepository {
    pool: DbPool,
}

impl PgTransactionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                id,
                account_id,
                operation_type,
                event_date,
                amount,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at, account_id, operation_type, event_date, amount
            "#,
        )
        .bind(transaction.meta.id)
        .bind(transaction.account_id)
        .bind(transaction.operation_type)
        .bind(transaction.event_date)
        .bind(transaction.amount)
        .bind(transaction.meta.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, created_at, account_id, operation_type, event_date, amount
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }
}
