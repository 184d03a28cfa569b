//! Error types for the bank ledger
//!
//! Every ledger operation returns either a definite result or one of the
//! classified errors below. None of them is fatal: the menu reports the
//! error and returns to the main menu.
//!
//! # Error Categories
//!
//! - **Validation**: malformed or out-of-range input (amounts, PINs, self-transfers)
//! - **NotFound**: unknown account number
//! - **AuthFailed**: PIN mismatch
//! - **InsufficientFunds**: withdrawal or transfer exceeds the balance
//! - **CapacityExceeded**: the ledger holds its maximum number of accounts

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for ledger operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Input was rejected before any state was touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No account exists with the given number
    #[error("Account {account} not found")]
    NotFound {
        /// The number that was looked up
        account: AccountNumber,
    },

    /// The supplied PIN does not match the stored one
    #[error("Incorrect PIN for account {account}")]
    AuthFailed {
        /// The account the PIN was checked against
        account: AccountNumber,
    },

    /// The balance does not cover the requested amount
    ///
    /// The account state remains unchanged.
    #[error("Insufficient funds in account {account}: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Account that would have been debited
        account: AccountNumber,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// The ledger already holds its maximum number of accounts
    #[error("Ledger is full: capacity of {capacity} accounts reached")]
    CapacityExceeded {
        /// Configured capacity
        capacity: usize,
    },
}

/// Reasons an input is rejected as invalid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Initial deposit cannot be negative: {amount}")]
    NegativeInitialDeposit { amount: Decimal },

    #[error("Amount must be positive: {amount}")]
    NonPositiveAmount { amount: Decimal },

    #[error("Amount {amount} has more than 2 decimal places")]
    TooManyDecimalPlaces { amount: Decimal },

    #[error("PIN must be exactly 4 digits")]
    InvalidPin,

    #[error("Cannot transfer funds from account {account} to itself")]
    SelfTransfer { account: AccountNumber },

    /// Checked decimal arithmetic would overflow
    #[error("Amount out of range for {operation} on account {account}")]
    AmountOutOfRange {
        operation: String,
        account: AccountNumber,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a NotFound error
    pub fn not_found(account: AccountNumber) -> Self {
        LedgerError::NotFound { account }
    }

    /// Create an AuthFailed error
    pub fn auth_failed(account: AccountNumber) -> Self {
        LedgerError::AuthFailed { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            available,
            requested,
        }
    }

    /// Create a CapacityExceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        LedgerError::CapacityExceeded { capacity }
    }

    /// Create a SelfTransfer validation error
    pub fn self_transfer(account: AccountNumber) -> Self {
        ValidationError::SelfTransfer { account }.into()
    }

    /// Create an AmountOutOfRange validation error
    pub fn amount_out_of_range(operation: &str, account: AccountNumber) -> Self {
        ValidationError::AmountOutOfRange {
            operation: operation.to_string(),
            account,
        }
        .into()
    }

    /// Whether this is a validation failure of any kind
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}
