//! Credit ledger service.
//!
//! Accounts carry an available credit limit; transactions recorded against
//! them move that limit down (cash withdrawals, installment purchases,
//! cash-advance withdrawals) or up (payments).

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

pub use app::{AppState, router};
pub use error::AppError;
