//! Bank Ledger Library
//! # Overview
//!
//! This library provides a single-process, in-memory bank-account ledger and
//! the interactive text menu that drives it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountNumber, Pin, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The banking operations
//!   - [`core::account_store`] - Account table in creation order with a number index
//!   - [`core::account_numbers`] - Random 6-digit account-number generation
//! - [`menu`] - The interactive menu over any reader/writer pair
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Create account**: open an account with a name, an opening deposit and a 4-digit PIN
//! - **Deposit**: credit funds (no PIN required)
//! - **Withdraw**: debit funds after a PIN check
//! - **Check balance**: show holder, number and balance after a PIN check
//! - **Transfer**: move funds between two distinct accounts, authorised by the source PIN
//! - **List accounts**: admin view of every account in creation order
//!
//! Balances never go negative and no failed operation changes any balance.

// Module declarations
pub mod cli;
pub mod core;
pub mod logging;
pub mod menu;
pub mod types;

pub use crate::core::{AccountNumberSource, Ledger, LedgerConfig, RandomAccountNumbers};
pub use menu::{MenuConfig, MenuSession};
pub use types::{Account, AccountNumber, BalanceStatement, LedgerError, Pin, ValidationError};
