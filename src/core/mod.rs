//! Core business logic module
//!
//! This module contains the ledger and its supporting components:
//! - `traits` - The account-number source abstraction
//! - `account_numbers` - Random 6-digit account-number generation
//! - `account_store` - Account table with number index
//! - `config` - Ledger configuration
//! - `ledger` - The banking operations

pub mod account_numbers;
pub mod account_store;
pub mod config;
pub mod ledger;
pub mod traits;

pub use account_numbers::RandomAccountNumbers;
pub use account_store::AccountStore;
pub use config::{LedgerConfig, DEFAULT_CAPACITY};
pub use ledger::{validate_amount, validate_initial_deposit, Ledger, MONEY_SCALE};
pub use traits::AccountNumberSource;
