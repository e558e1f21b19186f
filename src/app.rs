//! Shared application state and HTTP routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    db::DbPool,
    handlers,
    repositories::{
        AccountRepository, InMemoryAccountRepository, InMemoryTransactionRepository,
        PgAccountRepository, PgTransactionRepository, TransactionRepository,
    },
    services::{AccountService, TransactionService},
};

/// State shared with every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub transactions: TransactionService,
    /// Account store, pinged by the health check
    pub storage: Arc<dyn AccountRepository>,
}

impl AppState {
    /// Wire both services onto the given repositories.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        let account_service = AccountService::new(accounts.clone());
        let transaction_service = TransactionService::new(transactions, account_service.clone());

        Self {
            accounts: account_service,
            transactions: transaction_service,
            storage: accounts,
        }
    }

    /// State backed by PostgreSQL.
    pub fn postgres(pool: DbPool) -> Self {
        Self::new(
            Arc::new(PgAccountRepository::new(pool.clone())),
            Arc::new(PgTransactionRepository::new(pool)),
        )
    }

    /// State backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemoryTransactionRepository::new()),
        )
    }
}

/// Build the HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Account management routes
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        // Transaction routes
        .route(
            "/api/v1/transactions",
            post(handlers::transactions::create_transaction),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
