//! Output formatting for the menu
//!
//! All functions here are pure apart from writing to the supplied writer,
//! which keeps them easy to test.

use crate::types::{Account, AccountNumber, LedgerError, ValidationError};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Rule framing the admin account table
pub const TABLE_RULE: &str =
    "------------------------------------------------------------------";

/// The operation a failure happened in, for choosing a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Transfer { source: AccountNumber },
}

/// Format a monetary amount with exactly two decimals
pub fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// User-facing message for a failed ledger operation
pub fn failure_message(operation: Operation, error: &LedgerError) -> String {
    match (operation, error) {
        (Operation::CreateAccount, LedgerError::CapacityExceeded { .. }) => {
            "Cannot create more accounts. Bank has reached its maximum capacity.".to_string()
        }
        (Operation::Transfer { source }, LedgerError::NotFound { account }) if *account == source => {
            "Source account not found. Transfer failed.".to_string()
        }
        (Operation::Transfer { .. }, LedgerError::NotFound { .. }) => {
            "Destination account not found. Transfer failed.".to_string()
        }
        (_, LedgerError::NotFound { .. }) => {
            "Account not found. Please check the account number.".to_string()
        }
        (Operation::Withdraw, LedgerError::AuthFailed { .. }) => {
            "Incorrect PIN. Withdrawal failed.".to_string()
        }
        (Operation::CheckBalance, LedgerError::AuthFailed { .. }) => {
            "Incorrect PIN. Balance inquiry failed.".to_string()
        }
        (Operation::Transfer { .. }, LedgerError::AuthFailed { .. }) => {
            "Incorrect PIN for source account. Transfer failed.".to_string()
        }
        (Operation::Transfer { .. }, LedgerError::Validation(ValidationError::SelfTransfer { .. })) => {
            "Cannot transfer funds to the same account. Transfer failed.".to_string()
        }
        (Operation::Transfer { .. }, LedgerError::InsufficientFunds { .. }) => {
            "Insufficient balance in source account. Transfer failed.".to_string()
        }
        (_, LedgerError::InsufficientFunds { .. }) => "Insufficient balance.".to_string(),
        (_, other) => format!("{}.", other),
    }
}

/// Message shown when an entered amount fails validation
///
/// `label` names the amount in the message, e.g. "Deposit".
pub fn amount_rejection(label: &str, error: &ValidationError) -> String {
    match error {
        ValidationError::NegativeInitialDeposit { .. } => {
            "Initial deposit cannot be negative. Please enter a valid amount.".to_string()
        }
        ValidationError::NonPositiveAmount { .. } => {
            format!("{} amount must be positive. Please enter a valid amount.", label)
        }
        ValidationError::TooManyDecimalPlaces { .. } => {
            "Amount cannot have more than 2 decimal places. Please enter a valid amount.".to_string()
        }
        other => format!("{}. Please enter a valid amount.", other),
    }
}

/// Write the admin table of all accounts
///
/// Columns: holder, number, balance, PIN, each left-aligned and padded to its
/// full width. With `hide_pins` the PIN column shows `****` instead of the
/// digits.
pub fn write_accounts_table(
    accounts: &[Account],
    hide_pins: bool,
    output: &mut dyn Write,
) -> io::Result<()> {
    writeln!(output, "{}", TABLE_RULE)?;
    writeln!(
        output,
        "{}",
        table_row("Account Holder", "Account Number", "Balance", "PIN")
    )?;
    writeln!(output, "{}", TABLE_RULE)?;

    for account in accounts {
        let pin = if hide_pins { "****" } else { account.pin().as_str() };
        writeln!(
            output,
            "{}",
            table_row(
                account.holder_name(),
                &account.number().to_string(),
                &money(account.balance()),
                pin,
            )
        )?;
    }

    writeln!(output, "{}", TABLE_RULE)
}

fn table_row(holder: &str, number: &str, balance: &str, pin: &str) -> String {
    format!("{:<20} {:<15} {:<15} {:<10}", holder, number, balance, pin)
}
