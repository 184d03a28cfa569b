//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account, account numbers and PINs
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{
    Account, AccountNumber, BalanceStatement, Pin, ACCOUNT_NUMBER_MAX, ACCOUNT_NUMBER_MIN,
    ACCOUNT_NUMBER_SPACE,
};
pub use error::{LedgerError, ValidationError};
