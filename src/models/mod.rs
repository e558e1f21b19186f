//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request and response bodies built from them.

/// Credit account model
pub mod account;
/// Operation type catalog and sign rule
pub mod operation_type;
/// Identity fields shared by all entities
pub mod record;
/// Transaction model
pub mod transaction;
