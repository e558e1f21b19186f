//! Account service - creation, lookup and credit-limit adjustment.
//!
//! The service owns the account validation rules and is the only writer of
//! `available_credit_limit`.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        account::{Account, AccountResponse, CreateAccountRequest},
        record::RecordMeta,
    },
    repositories::AccountRepository,
};

#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// - `InvalidAccount`: document number missing or blank
    /// - `InvalidAvailableLimitCredit`: available credit limit missing
    /// - `Database`: Database error occurred
    pub async fn create(&self, request: CreateAccountRequest) -> Result<AccountResponse, AppError> {
        let Some(document_number) = request
            .document_number
            .filter(|number| !number.trim().is_empty())
        else {
            tracing::debug!("Account rejected: document number missing");
            return Err(AppError::InvalidAccount);
        };
        let Some(available_credit_limit) = request.available_credit_limit else {
            tracing::debug!("Account rejected: available credit limit missing");
            return Err(AppError::InvalidAvailableLimitCredit);
        };

        let account = Account {
            meta: RecordMeta::generate(),
            document_number,
            available_credit_limit,
        };
        let account = self.accounts.create(&account).await?;

        tracing::info!(
            account_id = %account.id(),
            available_credit_limit = %account.available_credit_limit,
            "Account created"
        );

        Ok(account.into())
    }

    /// Look up an account's representation.
    ///
    /// A missing account is a normal outcome and yields `Ok(None)`.
    pub async fn find(&self, id: Uuid) -> Result<Option<AccountResponse>, AppError> {
        Ok(self.accounts.find_by_id(id).await?.map(Into::into))
    }

    /// Look up the raw account entity, if an id was given and it exists.
    pub async fn find_optional(&self, id: Option<Uuid>) -> Result<Option<Account>, AppError> {
        match id {
            Some(id) => self.accounts.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Add `delta` to the account's available credit limit and persist it.
    ///
    /// The limit is not clamped; it may become negative.
    ///
    /// # Errors
    ///
    /// - `LimitOverflow`: the sum falls outside the `Decimal` range
    /// - `AccountNotFound`: the account is no longer stored
    pub async fn update_available_credit_limit(
        &self,
        delta: Decimal,
        mut account: Account,
    ) -> Result<Account, AppError> {
        account.available_credit_limit = adjusted_limit(&account, delta)?;
        let account = self.accounts.save(&account).await?;

        tracing::debug!(
            account_id = %account.id(),
            %delta,
            available_credit_limit = %account.available_credit_limit,
            "Available credit limit updated"
        );

        Ok(account)
    }
}

/// The account's available credit limit after adding `delta`.
pub(crate) fn adjusted_limit(account: &Account, delta: Decimal) -> Result<Decimal, AppError> {
    account
        .available_credit_limit
        .checked_add(delta)
        .ok_or_else(|| {
            tracing::debug!(account_id = %account.id(), %delta, "Available credit limit overflow");
            AppError::LimitOverflow
        })
}
