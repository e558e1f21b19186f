//! Transaction service - Core business logic for recording transactions.
//!
//! This service handles:
//! - Account existence validation
//! - Operation type resolution
//! - Canonical signing of amounts
//! - Available credit limit adjustment
//!
//! # Write Ordering
//!
//! The transaction row is written first, then the account's limit. The two
//! writes are not wrapped in a database transaction, so a failure between
//! them leaves a recorded transaction whose effect on the limit is missing.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        operation_type::OperationType,
        record::RecordMeta,
        transaction::{CreateTransactionRequest, Transaction, TransactionResponse},
    },
    repositories::TransactionRepository,
    services::account_service::{AccountService, adjusted_limit},
};

#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionRepository>,
    accounts: AccountService,
}

impl TransactionService {
    pub fn new(transactions: Arc<dyn TransactionRepository>, accounts: AccountService) -> Self {
        Self {
            transactions,
            accounts,
        }
    }

    /// Record a transaction and apply it to the account's available limit.
    ///
    /// # Process
    ///
    /// 1. Resolve the referenced account
    /// 2. Resolve the operation type code
    /// 3. Re-apply the operation type's sign to the submitted magnitude
    /// 4. Record the transaction
    /// 5. Add the signed amount to the account's available credit limit
    ///
    /// # Errors
    ///
    /// - `InvalidAccount`: `account_id` missing or unknown
    /// - `InvalidOperationType`: code missing or not in 1..=4
    /// - `InvalidAmount`: amount missing
    /// - `LimitOverflow`: the new limit would leave the `Decimal` range
    /// - `Database`: Database error occurred
    ///
    /// Validation failures happen before any write.
    pub async fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        let Some(account) = self.accounts.find_optional(request.account_id).await? else {
            tracing::debug!(account_id = ?request.account_id, "Transaction rejected: unknown account");
            return Err(AppError::InvalidAccount);
        };
        let operation_type = OperationType::resolve(request.operation_type).inspect_err(|_| {
            tracing::debug!(
                operation_type = ?request.operation_type,
                "Transaction rejected: invalid operation type"
            );
        })?;
        let Some(amount) = request.amount else {
            tracing::debug!("Transaction rejected: amount missing");
            return Err(AppError::InvalidAmount);
        };

        let signed_amount = operation_type.apply_sign(amount);
        // Checked before any write so an out-of-range result records nothing.
        adjusted_limit(&account, signed_amount)?;

        let meta = RecordMeta::generate();
        let transaction = Transaction {
            event_date: meta.created_at,
            meta,
            account_id: account.id(),
            operation_type,
            amount: signed_amount,
        };
        let transaction = self.transactions.create(&transaction).await?;

        let account = self
            .accounts
            .update_available_credit_limit(signed_amount, account)
            .await?;

        tracing::info!(
            transaction_id = %transaction.id(),
            account_id = %account.id(),
            operation_type = %operation_type,
            amount = %transaction.amount,
            available_credit_limit = %account.available_credit_limit,
            "Transaction recorded"
        );

        Ok(transaction.into())
    }

    /// Look up a transaction's representation; `Ok(None)` on miss.
    pub async fn find(&self, id: Uuid) -> Result<Option<TransactionResponse>, AppError> {
        Ok(self.transactions.find_by_id(id).await?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        models::account::CreateAccountRequest,
        repositories::{
            AccountRepository, InMemoryAccountRepository, InMemoryTransactionRepository,
        },
    };

    struct Fixture {
        service: TransactionService,
        accounts: Arc<InMemoryAccountRepository>,
        transactions: Arc<InMemoryTransactionRepository>,
        account_id: Uuid,
    }

    async fn fixture() -> Fixture {
        fixture_with_limit(Decimal::from(100)).await
    }

    async fn fixture_with_limit(limit: Decimal) -> Fixture {
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let transactions = Arc::new(InMemoryTransactionRepository::new());
        let account_service = AccountService::new(accounts.clone());

        let account = account_service
            .create(CreateAccountRequest {
                document_number: Some("98457968".to_string()),
                available_credit_limit: Some(limit),
            })
            .await
            .unwrap();

        Fixture {
            service: TransactionService::new(transactions.clone(), account_service),
            accounts,
            transactions,
            account_id: account.id,
        }
    }

    fn request(account_id: Option<Uuid>, code: Option<i64>, amount: i64) -> CreateTransactionRequest {
        CreateTransactionRequest {
            account_id,
            operation_type: code,
            amount: Some(Decimal::from(amount)),
        }
    }

    async fn limit_of(fixture: &Fixture) -> Decimal {
        fixture
            .accounts
            .find_by_id(fixture.account_id)
            .await
            .unwrap()
            .unwrap()
            .available_credit_limit
    }

    #[tokio::test]
    async fn cash_withdrawal_is_negative_and_reduces_limit() {
        let fixture = fixture().await;

        let created = fixture
            .service
            .create(request(Some(fixture.account_id), Some(1), 10))
            .await
            .unwrap();

        assert_eq!(created.account_id, fixture.account_id);
        assert_eq!(created.operation_type, 1);
        assert_eq!(created.amount, Decimal::from(-10));
        assert_eq!(limit_of(&fixture).await, Decimal::from(90));

        let stored = fixture.service.find(created.id).await.unwrap();
        assert_eq!(stored, Some(created));
    }

    #[tokio::test]
    async fn payment_is_positive_and_raises_limit() {
        let fixture = fixture().await;

        let created = fixture
            .service
            .create(request(Some(fixture.account_id), Some(4), 10))
            .await
            .unwrap();

        assert_eq!(created.operation_type, 4);
        assert_eq!(created.amount, Decimal::from(10));
        assert_eq!(limit_of(&fixture).await, Decimal::from(110));
    }

    #[tokio::test]
    async fn caller_supplied_sign_is_ignored() {
        let fixture = fixture().await;

        let withdrawal = fixture
            .service
            .create(request(Some(fixture.account_id), Some(3), -10))
            .await
            .unwrap();
        let payment = fixture
            .service
            .create(request(Some(fixture.account_id), Some(4), -5))
            .await
            .unwrap();

        assert_eq!(withdrawal.amount, Decimal::from(-10));
        assert_eq!(payment.amount, Decimal::from(5));
        assert_eq!(limit_of(&fixture).await, Decimal::from(95));
    }

    #[tokio::test]
    async fn limit_may_go_negative() {
        let fixture = fixture().await;

        fixture
            .service
            .create(request(Some(fixture.account_id), Some(2), 150))
            .await
            .unwrap();

        assert_eq!(limit_of(&fixture).await, Decimal::from(-50));
    }

    #[tokio::test]
    async fn payment_past_decimal_range_is_rejected_without_writes() {
        let fixture = fixture_with_limit(Decimal::MAX).await;

        let err = fixture
            .service
            .create(request(Some(fixture.account_id), Some(4), 1))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::LimitOverflow));
        assert!(fixture.transactions.is_empty().await);
        assert_eq!(limit_of(&fixture).await, Decimal::MAX);
    }

    #[tokio::test]
    async fn unknown_or_missing_account_is_rejected_without_writes() {
        let fixture = fixture().await;

        for account_id in [None, Some(Uuid::new_v4())] {
            let err = fixture
                .service
                .create(request(account_id, Some(1), 10))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidAccount));
            assert_eq!(err.to_string(), "Account invalid or not found");
        }

        assert!(fixture.transactions.is_empty().await);
        assert_eq!(limit_of(&fixture).await, Decimal::from(100));
    }

    #[tokio::test]
    async fn invalid_operation_type_is_rejected_without_writes() {
        let fixture = fixture().await;

        for code in [None, Some(0), Some(5), Some(4_294_967_296)] {
            let err = fixture
                .service
                .create(request(Some(fixture.account_id), code, 10))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidOperationType));
        }

        assert!(fixture.transactions.is_empty().await);
        assert_eq!(limit_of(&fixture).await, Decimal::from(100));
    }

    #[tokio::test]
    async fn missing_amount_is_rejected() {
        let fixture = fixture().await;

        let err = fixture
            .service
            .create(CreateTransactionRequest {
                account_id: Some(fixture.account_id),
                operation_type: Some(1),
                amount: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidAmount));
        assert!(fixture.transactions.is_empty().await);
    }

    #[tokio::test]
    async fn find_returns_none_on_miss() {
        let fixture = fixture().await;

        assert_eq!(fixture.service.find(Uuid::new_v4()).await.unwrap(), None);
    }
}
