//! Account-related types for the bank ledger
//!
//! This module defines the Account structure together with the small
//! value types that identify and protect it: `AccountNumber` and `Pin`.

use super::error::{LedgerError, ValidationError};
use rust_decimal::Decimal;
use std::fmt;

/// Smallest account number the ledger hands out
pub const ACCOUNT_NUMBER_MIN: u32 = 100_000;

/// Largest account number the ledger hands out
pub const ACCOUNT_NUMBER_MAX: u32 = 999_999;

/// Number of distinct account numbers available
pub const ACCOUNT_NUMBER_SPACE: usize = (ACCOUNT_NUMBER_MAX - ACCOUNT_NUMBER_MIN + 1) as usize;

/// Account identifier
///
/// Any `u32` can be wrapped so that user input can be looked up, but only
/// values in `[100000, 999999]` are ever assigned to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(u32);

impl AccountNumber {
    pub fn new(value: u32) -> Self {
        AccountNumber(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this number lies in the 6-digit range the ledger assigns from
    pub fn is_assignable(self) -> bool {
        (ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX).contains(&self.0)
    }
}

impl From<u32> for AccountNumber {
    fn from(value: u32) -> Self {
        AccountNumber(value)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding/alignment flags from the caller apply to the bare integer
        fmt::Display::fmt(&self.0, f)
    }
}

/// Four-digit personal identification number
///
/// Stored and compared as plaintext. The `Debug` implementation masks the
/// digits so a PIN never ends up in log output by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    /// Number of digits a PIN must have
    pub const LENGTH: usize = 4;

    /// Parse a PIN, accepting exactly four ASCII digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPin` for anything else, including
    /// surrounding whitespace and non-ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        if raw.len() == Self::LENGTH && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Pin(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPin.into())
        }
    }

    /// Compare an attempt against this PIN using plain string equality
    pub fn matches(&self, attempt: &str) -> bool {
        self.0 == attempt
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// A customer account held by the ledger
///
/// The number, holder name and PIN are fixed at creation. The balance is
/// only changed through the ledger, which keeps it non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    balance: Decimal,
    pin: Pin,
}

impl Account {
    pub(crate) fn new(
        number: AccountNumber,
        holder_name: String,
        balance: Decimal,
        pin: Pin,
    ) -> Self {
        Account {
            number,
            holder_name,
            balance,
            pin,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        debug_assert!(balance >= Decimal::ZERO, "balance must never go negative");
        self.balance = balance;
    }
}

/// Result of a successful balance inquiry
///
/// Carries only what the account holder is shown, never the PIN.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceStatement {
    pub holder_name: String,
    pub account_number: AccountNumber,
    pub balance: Decimal,
}
