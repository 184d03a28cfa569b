//! Account storage module
//!
//! This module provides the `AccountStore` struct which owns every account
//! record in creation order and keeps an index from account number to
//! position for constant-time lookup.

use crate::types::{Account, AccountNumber};
use std::collections::HashMap;

/// In-memory account table
///
/// Accounts are appended and never removed, so positions recorded in the
/// index stay valid for the lifetime of the store.
#[derive(Debug, Default)]
pub struct AccountStore {
    /// Accounts in creation order
    accounts: Vec<Account>,

    /// Map of account numbers to positions in `accounts`
    index: HashMap<AccountNumber, usize>,
}

impl AccountStore {
    /// Create an empty store with room for `capacity` accounts
    pub fn with_capacity(capacity: usize) -> Self {
        AccountStore {
            accounts: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append an account
    ///
    /// The caller guarantees the account number is not already present.
    pub fn insert(&mut self, account: Account) {
        debug_assert!(
            !self.index.contains_key(&account.number()),
            "duplicate account number {}",
            account.number()
        );
        self.index.insert(account.number(), self.accounts.len());
        self.accounts.push(account);
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.index.contains_key(&number)
    }

    pub fn get(&self, number: AccountNumber) -> Option<&Account> {
        self.index.get(&number).map(|&i| &self.accounts[i])
    }

    pub fn get_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.index.get(&number).map(|&i| &mut self.accounts[i])
    }

    /// All accounts in creation order
    pub fn as_slice(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pin;
    use rust_decimal::Decimal;

    fn account(number: u32, name: &str) -> Account {
        Account::new(
            AccountNumber::new(number),
            name.to_string(),
            Decimal::ZERO,
            Pin::parse("1234").unwrap(),
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = AccountStore::with_capacity(10);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.as_slice().is_empty());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = AccountStore::default();
        store.insert(account(500000, "Alice"));

        assert!(store.contains(AccountNumber::new(500000)));
        assert_eq!(store.get(AccountNumber::new(500000)).unwrap().holder_name(), "Alice");
        assert!(store.get(AccountNumber::new(500001)).is_none());
    }

    #[test]
    fn test_preserves_creation_order() {
        let mut store = AccountStore::default();
        store.insert(account(900000, "Carol"));
        store.insert(account(100000, "Alice"));
        store.insert(account(500000, "Bob"));

        let names: Vec<_> = store.as_slice().iter().map(|a| a.holder_name()).collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut store = AccountStore::default();
        store.insert(account(100000, "Alice"));
        store.insert(account(200000, "Bob"));

        store
            .get_mut(AccountNumber::new(200000))
            .unwrap()
            .set_balance(Decimal::new(4250, 2));

        assert_eq!(store.as_slice()[1].balance(), Decimal::new(4250, 2));
        assert_eq!(store.as_slice()[0].balance(), Decimal::ZERO);
    }
}
