//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They validate requests, apply the ledger rules and talk to the
//! repositories.

pub mod account_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use transaction_service::TransactionService;
