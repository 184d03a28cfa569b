//! Ledger configuration

use crate::types::ACCOUNT_NUMBER_SPACE;
use tracing::warn;

/// Number of accounts a ledger holds when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 100;

/// Configuration for a [`Ledger`](crate::core::Ledger)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Maximum number of accounts the ledger will hold
    pub capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LedgerConfig {
    /// Create a LedgerConfig with a custom capacity
    ///
    /// A capacity of zero, or one larger than the number of distinct 6-digit
    /// account numbers, falls back to [`DEFAULT_CAPACITY`] with a warning.
    /// The upper bound keeps account-number generation guaranteed to find a
    /// free number.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 || capacity > ACCOUNT_NUMBER_SPACE {
            warn!(
                requested = capacity,
                fallback = DEFAULT_CAPACITY,
                "invalid ledger capacity, using default"
            );
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        Self { capacity }
    }
}
