//! Account ledger
//!
//! This module provides the `Ledger` that owns every account and implements
//! the banking operations on top of the `AccountStore`.
//!
//! The ledger enforces business rules such as:
//! - Bounded capacity and unique 6-digit account numbers
//! - PIN checks before withdrawals, balance inquiries and outgoing transfers
//! - Non-negative balances with at most two decimal places
//!
//! Every operation validates its input completely before mutating anything,
//! so a failed call never leaves the ledger partially updated.

use crate::core::account_numbers::RandomAccountNumbers;
use crate::core::account_store::AccountStore;
use crate::core::config::LedgerConfig;
use crate::core::traits::AccountNumberSource;
use crate::types::{
    Account, AccountNumber, BalanceStatement, LedgerError, Pin, ValidationError,
};
use rust_decimal::Decimal;
use tracing::{debug, info, trace};

/// Number of fractional digits a monetary amount may carry
pub const MONEY_SCALE: u32 = 2;

/// Check that an amount is strictly positive with at most two decimal places
///
/// Used for deposits, withdrawals and transfers.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { amount });
    }
    check_scale(amount)
}

/// Check that an initial deposit is non-negative with at most two decimal places
pub fn validate_initial_deposit(amount: Decimal) -> Result<(), ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeInitialDeposit { amount });
    }
    check_scale(amount)
}

fn check_scale(amount: Decimal) -> Result<(), ValidationError> {
    // 10.50 and 10.500 are the same amount; only significant digits count
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(ValidationError::TooManyDecimalPlaces { amount });
    }
    Ok(())
}

/// In-memory bank ledger
///
/// Owns the account table and the source of new account numbers. Constructed
/// once at start-up and lent to the menu session for the rest of the process.
#[derive(Debug)]
pub struct Ledger<N = RandomAccountNumbers> {
    store: AccountStore,
    numbers: N,
    capacity: usize,
}

impl Ledger<RandomAccountNumbers> {
    /// Create an empty ledger drawing account numbers from OS entropy
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_number_source(config, RandomAccountNumbers::new())
    }
}

impl Default for Ledger<RandomAccountNumbers> {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl<N: AccountNumberSource> Ledger<N> {
    /// Create an empty ledger using the given account-number source
    pub fn with_number_source(config: LedgerConfig, numbers: N) -> Self {
        Ledger {
            store: AccountStore::with_capacity(config.capacity),
            numbers,
            capacity: config.capacity,
        }
    }

    /// Open a new account
    ///
    /// # Arguments
    ///
    /// * `holder_name` - Free-form name of the account holder
    /// * `initial_deposit` - Opening balance (may be zero)
    /// * `pin` - Four ASCII digits
    ///
    /// # Returns
    ///
    /// A snapshot of the newly created account, including its generated number
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ledger is already at capacity (checked first)
    /// - The initial deposit is negative or has more than 2 decimal places
    /// - The PIN is not exactly 4 digits
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        initial_deposit: Decimal,
        pin: &str,
    ) -> Result<Account, LedgerError> {
        if self.is_full() {
            debug!(capacity = self.capacity, "create rejected: ledger full");
            return Err(LedgerError::capacity_exceeded(self.capacity));
        }

        validate_initial_deposit(initial_deposit)
            .inspect_err(|e| debug!(error = %e, "create rejected"))?;
        let pin = Pin::parse(pin).inspect_err(|e| debug!(error = %e, "create rejected"))?;

        let number = self.next_account_number();
        let account = Account::new(number, holder_name.into(), initial_deposit, pin);
        self.store.insert(account.clone());

        info!(
            account = %number,
            balance = %initial_deposit,
            total_accounts = self.store.len(),
            "account created"
        );
        Ok(account)
    }

    /// Credit funds to an account
    ///
    /// No PIN is required for deposits.
    ///
    /// # Returns
    ///
    /// The balance after the deposit
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account has the given number
    /// - The amount is not positive or has more than 2 decimal places
    /// - The new balance would overflow
    pub fn deposit(&mut self, number: AccountNumber, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.try_deposit(number, amount)
            .inspect(|balance| info!(account = %number, %amount, %balance, "deposit"))
            .inspect_err(|e| debug!(account = %number, error = %e, "deposit rejected"))
    }

    fn try_deposit(&mut self, number: AccountNumber, amount: Decimal) -> Result<Decimal, LedgerError> {
        let balance = self.find(number)?.balance();
        validate_amount(amount)?;

        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::amount_out_of_range("deposit", number))?;

        self.write_balance(number, new_balance)?;
        Ok(new_balance)
    }

    /// Debit funds from an account
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - No account has the given number
    /// - The PIN does not match
    /// - The amount is not positive or has more than 2 decimal places
    /// - The balance is smaller than the amount
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        pin: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.try_withdraw(number, pin, amount)
            .inspect(|balance| info!(account = %number, %amount, %balance, "withdrawal"))
            .inspect_err(|e| debug!(account = %number, error = %e, "withdrawal rejected"))
    }

    fn try_withdraw(
        &mut self,
        number: AccountNumber,
        pin: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let balance = self.authenticate(number, pin)?.balance();
        validate_amount(amount)?;

        if balance < amount {
            return Err(LedgerError::insufficient_funds(number, balance, amount));
        }

        let new_balance = balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::amount_out_of_range("withdrawal", number))?;

        self.write_balance(number, new_balance)?;
        Ok(new_balance)
    }

    /// Report the holder, number and balance of an account
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown number and `AuthFailed` for a wrong PIN.
    pub fn check_balance(&self, number: AccountNumber, pin: &str) -> Result<BalanceStatement, LedgerError> {
        let account = self
            .authenticate(number, pin)
            .inspect_err(|e| debug!(account = %number, error = %e, "balance inquiry rejected"))?;

        debug!(account = %number, "balance inquiry");
        Ok(BalanceStatement {
            holder_name: account.holder_name().to_string(),
            account_number: account.number(),
            balance: account.balance(),
        })
    }

    /// Move funds from one account to another
    ///
    /// Both new balances are computed before either is written, so the
    /// transfer is all-or-nothing.
    ///
    /// # Returns
    ///
    /// The source account's balance after the transfer
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - Source account not found
    /// - Source PIN does not match
    /// - Destination account not found
    /// - Source and destination are the same account
    /// - The amount is not positive or has more than 2 decimal places
    /// - The source balance is smaller than the amount
    pub fn transfer(
        &mut self,
        source: AccountNumber,
        source_pin: &str,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.try_transfer(source, source_pin, destination, amount)
            .inspect(|balance| {
                info!(
                    from = %source,
                    to = %destination,
                    %amount,
                    source_balance = %balance,
                    "transfer"
                )
            })
            .inspect_err(|e| {
                debug!(from = %source, to = %destination, error = %e, "transfer rejected")
            })
    }

    fn try_transfer(
        &mut self,
        source: AccountNumber,
        source_pin: &str,
        destination: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let source_balance = self.authenticate(source, source_pin)?.balance();
        let destination_balance = self.find(destination)?.balance();

        if source == destination {
            return Err(LedgerError::self_transfer(source));
        }

        validate_amount(amount)?;

        if source_balance < amount {
            return Err(LedgerError::insufficient_funds(source, source_balance, amount));
        }

        let new_source = source_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::amount_out_of_range("transfer", source))?;
        let new_destination = destination_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::amount_out_of_range("transfer", destination))?;

        self.write_balance(source, new_source)?;
        self.write_balance(destination, new_destination)?;
        Ok(new_source)
    }

    /// All accounts in creation order
    pub fn list_accounts(&self) -> &[Account] {
        self.store.as_slice()
    }

    /// Look up an account by number
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has the given number.
    pub fn find(&self, number: AccountNumber) -> Result<&Account, LedgerError> {
        self.store
            .get(number)
            .ok_or_else(|| LedgerError::not_found(number))
    }

    /// Look up an account and check its PIN
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown number, then `AuthFailed` if the
    /// attempt is not exactly equal to the stored PIN.
    pub fn authenticate(&self, number: AccountNumber, pin: &str) -> Result<&Account, LedgerError> {
        let account = self.find(number)?;
        if !account.pin().matches(pin) {
            return Err(LedgerError::auth_failed(number));
        }
        Ok(account)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.store.len() >= self.capacity
    }

    /// Draw numbers until one is 6 digits and not yet taken
    fn next_account_number(&mut self) -> AccountNumber {
        loop {
            let candidate = self.numbers.draw();
            if candidate.is_assignable() && !self.store.contains(candidate) {
                return candidate;
            }
            trace!(candidate = %candidate, "account number unavailable, redrawing");
        }
    }

    fn write_balance(&mut self, number: AccountNumber, balance: Decimal) -> Result<(), LedgerError> {
        self.store
            .get_mut(number)
            .ok_or_else(|| LedgerError::not_found(number))?
            .set_balance(balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account_numbers::RandomAccountNumbers;
    use rstest::rstest;
    use std::collections::{HashSet, VecDeque};
    use std::str::FromStr;

    /// Hands out a fixed list of numbers, then counts upward from 100000
    struct ScriptedNumbers {
        queue: VecDeque<u32>,
        next: u32,
        draws: usize,
    }

    impl ScriptedNumbers {
        fn new(values: &[u32]) -> Self {
            Self {
                queue: values.iter().copied().collect(),
                next: 100_000,
                draws: 0,
            }
        }
    }

    impl AccountNumberSource for ScriptedNumbers {
        fn draw(&mut self) -> AccountNumber {
            self.draws += 1;
            let value = self.queue.pop_front().unwrap_or_else(|| {
                self.next += 1;
                self.next
            });
            AccountNumber::new(value)
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ledger() -> Ledger<RandomAccountNumbers> {
        Ledger::with_number_source(LedgerConfig::default(), RandomAccountNumbers::seeded(99))
    }

    fn ledger_with_two_accounts() -> (Ledger<RandomAccountNumbers>, AccountNumber, AccountNumber) {
        let mut ledger = ledger();
        let a = ledger.create_account("Alice", dec("100.00"), "1234").unwrap().number();
        let b = ledger.create_account("Bob", dec("50.00"), "5678").unwrap().number();
        (ledger, a, b)
    }

    // Validation helper tests

    #[rstest]
    #[case::cent("0.01")]
    #[case::whole("5")]
    #[case::two_places("10.25")]
    #[case::trailing_zeros("10.500")]
    fn test_validate_amount_accepts(#[case] amount: &str) {
        assert!(validate_amount(dec(amount)).is_ok());
    }

    #[rstest]
    #[case::zero("0", ValidationError::NonPositiveAmount { amount: dec("0") })]
    #[case::negative("-1.00", ValidationError::NonPositiveAmount { amount: dec("-1.00") })]
    #[case::three_places("1.005", ValidationError::TooManyDecimalPlaces { amount: dec("1.005") })]
    fn test_validate_amount_rejects(#[case] amount: &str, #[case] expected: ValidationError) {
        assert_eq!(validate_amount(dec(amount)).unwrap_err(), expected);
    }

    #[rstest]
    #[case::zero("0", true)]
    #[case::positive("100.00", true)]
    #[case::negative("-0.01", false)]
    #[case::three_places("0.001", false)]
    fn test_validate_initial_deposit(#[case] amount: &str, #[case] ok: bool) {
        assert_eq!(validate_initial_deposit(dec(amount)).is_ok(), ok);
    }

    // CreateAccount

    #[test]
    fn test_create_account_returns_snapshot() {
        let mut ledger = ledger();
        let account = ledger.create_account("Alice", dec("100.00"), "1234").unwrap();

        assert_eq!(account.holder_name(), "Alice");
        assert_eq!(account.balance(), dec("100.00"));
        assert!(account.number().is_assignable());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.find(account.number()).unwrap(), &account);
    }

    #[test]
    fn test_create_account_with_zero_deposit() {
        let mut ledger = ledger();
        let account = ledger.create_account("Bob", Decimal::ZERO, "0000").unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_create_account_negative_deposit_adds_nothing() {
        let mut ledger = ledger();
        let result = ledger.create_account("Alice", dec("-5.00"), "1234");

        assert_eq!(
            result.unwrap_err(),
            LedgerError::Validation(ValidationError::NegativeInitialDeposit { amount: dec("-5.00") })
        );
        assert!(ledger.is_empty());
    }

    #[rstest]
    #[case::short("123")]
    #[case::letters("abcd")]
    #[case::long("12345")]
    fn test_create_account_invalid_pin_adds_nothing(#[case] pin: &str) {
        let mut ledger = ledger();
        let result = ledger.create_account("Alice", dec("10"), pin);

        assert_eq!(
            result.unwrap_err(),
            LedgerError::Validation(ValidationError::InvalidPin)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_create_account_redraws_on_collision() {
        let numbers = ScriptedNumbers::new(&[555555, 555555, 555555, 666666]);
        let mut ledger = Ledger::with_number_source(LedgerConfig::default(), numbers);

        let first = ledger.create_account("A", Decimal::ZERO, "1111").unwrap();
        let second = ledger.create_account("B", Decimal::ZERO, "2222").unwrap();

        assert_eq!(first.number(), AccountNumber::new(555555));
        assert_eq!(second.number(), AccountNumber::new(666666));
        assert_eq!(ledger.numbers.draws, 4);
    }

    #[test]
    fn test_create_account_discards_out_of_range_draws() {
        let numbers = ScriptedNumbers::new(&[42, 1_000_000, 99_999, 123456]);
        let mut ledger = Ledger::with_number_source(LedgerConfig::default(), numbers);

        let account = ledger.create_account("A", Decimal::ZERO, "1111").unwrap();
        assert_eq!(account.number(), AccountNumber::new(123456));
    }

    #[test]
    fn test_numbers_unique_and_six_digits_up_to_capacity() {
        let mut ledger = ledger();
        let mut seen = HashSet::new();

        for i in 0..ledger.capacity() {
            let account = ledger
                .create_account(format!("holder {}", i), Decimal::ZERO, "1234")
                .unwrap();
            assert_eq!(account.number().to_string().len(), 6);
            assert!(seen.insert(account.number()), "duplicate {}", account.number());
        }

        assert_eq!(ledger.len(), 100);
        assert!(ledger.is_full());
    }

    #[test]
    fn test_create_account_beyond_capacity() {
        let mut ledger =
            Ledger::with_number_source(LedgerConfig::new(2), RandomAccountNumbers::seeded(3));
        ledger.create_account("A", Decimal::ZERO, "1111").unwrap();
        ledger.create_account("B", Decimal::ZERO, "2222").unwrap();

        for _ in 0..3 {
            let result = ledger.create_account("C", Decimal::ZERO, "3333");
            assert_eq!(result.unwrap_err(), LedgerError::CapacityExceeded { capacity: 2 });
            assert_eq!(ledger.len(), 2);
        }
    }

    #[test]
    fn test_capacity_checked_before_validation() {
        let mut ledger =
            Ledger::with_number_source(LedgerConfig::new(1), RandomAccountNumbers::seeded(3));
        ledger.create_account("A", Decimal::ZERO, "1111").unwrap();

        let result = ledger.create_account("B", dec("-1"), "bad");
        assert!(matches!(result, Err(LedgerError::CapacityExceeded { .. })));
    }

    // Deposit

    #[test]
    fn test_deposit_increases_balance() {
        let (mut ledger, a, _) = ledger_with_two_accounts();

        assert_eq!(ledger.deposit(a, dec("50.00")).unwrap(), dec("150.00"));
        assert_eq!(ledger.deposit(a, dec("0.01")).unwrap(), dec("150.01"));
        assert_eq!(ledger.find(a).unwrap().balance(), dec("150.01"));
    }

    #[test]
    fn test_deposit_unknown_account() {
        let (mut ledger, _, _) = ledger_with_two_accounts();
        let missing = AccountNumber::new(1);

        assert_eq!(
            ledger.deposit(missing, dec("10")).unwrap_err(),
            LedgerError::NotFound { account: missing }
        );
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-10")]
    #[case::three_places("1.001")]
    fn test_deposit_invalid_amount_leaves_balance(#[case] amount: &str) {
        let (mut ledger, a, _) = ledger_with_two_accounts();

        let result = ledger.deposit(a, dec(amount));
        assert!(result.unwrap_err().is_validation());
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let (mut ledger, a, _) = ledger_with_two_accounts();
        let huge = Decimal::MAX.trunc();

        let result = ledger.deposit(a, huge);
        assert!(matches!(
            result,
            Err(LedgerError::Validation(ValidationError::AmountOutOfRange { .. }))
        ));
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
    }

    // Withdraw

    #[test]
    fn test_withdraw_decreases_balance() {
        let (mut ledger, a, _) = ledger_with_two_accounts();
        assert_eq!(ledger.withdraw(a, "1234", dec("30.00")).unwrap(), dec("70.00"));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let (mut ledger, a, _) = ledger_with_two_accounts();
        assert_eq!(ledger.withdraw(a, "1234", dec("100")).unwrap(), Decimal::ZERO);
    }

    #[rstest]
    #[case::wrong_digits("4321")]
    #[case::empty("")]
    #[case::padded(" 1234")]
    fn test_withdraw_wrong_pin_leaves_balance(#[case] pin: &str) {
        let (mut ledger, a, _) = ledger_with_two_accounts();

        assert_eq!(
            ledger.withdraw(a, pin, dec("10")).unwrap_err(),
            LedgerError::AuthFailed { account: a }
        );
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let (mut ledger, a, _) = ledger_with_two_accounts();

        assert_eq!(
            ledger.withdraw(a, "1234", dec("100.01")).unwrap_err(),
            LedgerError::InsufficientFunds {
                account: a,
                available: dec("100.00"),
                requested: dec("100.01"),
            }
        );
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
    }

    #[test]
    fn test_withdraw_error_precedence() {
        let (mut ledger, a, _) = ledger_with_two_accounts();
        let missing = AccountNumber::new(999);

        // NotFound beats everything
        assert!(matches!(
            ledger.withdraw(missing, "bad", dec("-1")),
            Err(LedgerError::NotFound { .. })
        ));
        // AuthFailed beats validation
        assert!(matches!(
            ledger.withdraw(a, "0000", dec("-1")),
            Err(LedgerError::AuthFailed { .. })
        ));
        // Validation beats insufficient funds
        assert!(matches!(
            ledger.withdraw(a, "1234", dec("1000.001")),
            Err(LedgerError::Validation(ValidationError::TooManyDecimalPlaces { .. }))
        ));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    fn test_withdraw_non_positive_amount_changes_nothing(#[case] amount: &str) {
        let (mut ledger, a, b) = ledger_with_two_accounts();

        assert_eq!(
            ledger.withdraw(a, "1234", dec(amount)).unwrap_err(),
            LedgerError::Validation(ValidationError::NonPositiveAmount { amount: dec(amount) })
        );
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
        assert_eq!(ledger.find(b).unwrap().balance(), dec("50.00"));
    }

    // CheckBalance

    #[test]
    fn test_check_balance() {
        let (ledger, a, _) = ledger_with_two_accounts();

        let statement = ledger.check_balance(a, "1234").unwrap();
        assert_eq!(
            statement,
            BalanceStatement {
                holder_name: "Alice".to_string(),
                account_number: a,
                balance: dec("100.00"),
            }
        );
    }

    #[test]
    fn test_check_balance_errors() {
        let (ledger, a, _) = ledger_with_two_accounts();
        let missing = AccountNumber::new(100);

        assert_eq!(
            ledger.check_balance(missing, "1234").unwrap_err(),
            LedgerError::NotFound { account: missing }
        );
        assert_eq!(
            ledger.check_balance(a, "5678").unwrap_err(),
            LedgerError::AuthFailed { account: a }
        );
    }

    // Transfer

    #[test]
    fn test_transfer_moves_exact_amount_and_conserves_total() {
        let (mut ledger, a, b) = ledger_with_two_accounts();
        let total_before = ledger.find(a).unwrap().balance() + ledger.find(b).unwrap().balance();

        let new_source = ledger.transfer(a, "1234", b, dec("35.50")).unwrap();

        assert_eq!(new_source, dec("64.50"));
        assert_eq!(ledger.find(a).unwrap().balance(), dec("64.50"));
        assert_eq!(ledger.find(b).unwrap().balance(), dec("85.50"));
        let total_after = ledger.find(a).unwrap().balance() + ledger.find(b).unwrap().balance();
        assert_eq!(total_before, total_after);
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let (mut ledger, a, _) = ledger_with_two_accounts();

        assert_eq!(
            ledger.transfer(a, "1234", a, dec("10")).unwrap_err(),
            LedgerError::self_transfer(a)
        );
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
    }

    #[test]
    fn test_transfer_insufficient_funds_changes_nothing() {
        let (mut ledger, a, b) = ledger_with_two_accounts();

        let result = ledger.transfer(b, "5678", a, dec("50.01"));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
        assert_eq!(ledger.find(b).unwrap().balance(), dec("50.00"));
    }

    #[test]
    fn test_transfer_error_precedence() {
        let (mut ledger, a, _) = ledger_with_two_accounts();
        let missing = AccountNumber::new(7);

        // Missing source checked first
        assert_eq!(
            ledger.transfer(missing, "1234", missing, dec("-1")).unwrap_err(),
            LedgerError::not_found(missing)
        );
        // Source PIN checked before destination lookup
        assert_eq!(
            ledger.transfer(a, "9999", missing, dec("-1")).unwrap_err(),
            LedgerError::auth_failed(a)
        );
        // Destination lookup before self-transfer and amount checks
        assert_eq!(
            ledger.transfer(a, "1234", missing, dec("-1")).unwrap_err(),
            LedgerError::not_found(missing)
        );
        // Self-transfer before amount checks
        assert_eq!(
            ledger.transfer(a, "1234", a, dec("-1")).unwrap_err(),
            LedgerError::self_transfer(a)
        );
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    fn test_transfer_non_positive_amount_changes_nothing(#[case] amount: &str) {
        let (mut ledger, a, b) = ledger_with_two_accounts();

        assert_eq!(
            ledger.transfer(a, "1234", b, dec(amount)).unwrap_err(),
            LedgerError::Validation(ValidationError::NonPositiveAmount { amount: dec(amount) })
        );
        assert_eq!(ledger.find(a).unwrap().balance(), dec("100.00"));
        assert_eq!(ledger.find(b).unwrap().balance(), dec("50.00"));
    }

    #[test]
    fn test_transfer_destination_overflow_changes_nothing() {
        let mut ledger = ledger();
        let rich = ledger
            .create_account("Rich", Decimal::MAX.trunc(), "1111")
            .unwrap()
            .number();
        let sender = ledger.create_account("Sender", dec("10"), "2222").unwrap().number();

        let result = ledger.transfer(sender, "2222", rich, dec("10"));
        assert!(matches!(
            result,
            Err(LedgerError::Validation(ValidationError::AmountOutOfRange { .. }))
        ));
        assert_eq!(ledger.find(sender).unwrap().balance(), dec("10"));
        assert_eq!(ledger.find(rich).unwrap().balance(), Decimal::MAX.trunc());
    }

    // ListAccounts

    #[test]
    fn test_list_accounts_empty() {
        let ledger = ledger();
        assert!(ledger.list_accounts().is_empty());
    }

    #[test]
    fn test_list_accounts_in_creation_order() {
        let (ledger, a, b) = ledger_with_two_accounts();
        let numbers: Vec<_> = ledger.list_accounts().iter().map(|acc| acc.number()).collect();
        assert_eq!(numbers, vec![a, b]);
    }

    // Invariants over mixed operation sequences

    #[test]
    fn test_balances_never_negative() {
        let (mut ledger, a, b) = ledger_with_two_accounts();
        let amounts = ["0.01", "99.99", "100", "150.50", "1", "0.5", "250", "42.42"];

        for (i, amount) in amounts.iter().cycle().take(64).enumerate() {
            let amount = dec(amount);
            let _ = match i % 4 {
                0 => ledger.withdraw(a, "1234", amount),
                1 => ledger.transfer(a, "1234", b, amount),
                2 => ledger.transfer(b, "5678", a, amount),
                _ => ledger.withdraw(b, "5678", amount),
            };
            for account in ledger.list_accounts() {
                assert!(account.balance() >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_alice_and_bob_scenario() {
        let mut ledger = ledger();

        let alice = ledger.create_account("Alice", dec("100.00"), "1234").unwrap();
        let n = alice.number();
        assert_eq!(alice.balance(), dec("100.00"));

        assert_eq!(ledger.deposit(n, dec("50.00")).unwrap(), dec("150.00"));
        assert_eq!(ledger.withdraw(n, "1234", dec("30.00")).unwrap(), dec("120.00"));
        assert!(matches!(
            ledger.withdraw(n, "0000", dec("1.00")),
            Err(LedgerError::AuthFailed { .. })
        ));
        assert_eq!(ledger.find(n).unwrap().balance(), dec("120.00"));

        let bob = ledger.create_account("Bob", dec("0.00"), "5678").unwrap();
        let m = bob.number();
        assert_ne!(n, m);

        assert_eq!(ledger.transfer(n, "1234", m, dec("120.00")).unwrap(), dec("0.00"));
        assert_eq!(ledger.find(m).unwrap().balance(), dec("120.00"));

        assert!(matches!(
            ledger.withdraw(n, "1234", dec("1.00")),
            Err(LedgerError::InsufficientFunds { .. })
        ));
    }
}
