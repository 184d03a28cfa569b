//! Interactive menu session
//!
//! `MenuSession` runs the numbered menu against a borrowed `Ledger`. It owns
//! all input validation loops, so every call it makes into the ledger carries
//! well-formed values; the ledger still re-checks them and any error it
//! returns is reported and control goes back to the menu.

use crate::core::{validate_amount, validate_initial_deposit, AccountNumberSource, Ledger};
use crate::menu::prompt::Prompter;
use crate::menu::render::{amount_rejection, failure_message, money, write_accounts_table, Operation};
use crate::types::{AccountNumber, LedgerError, Pin, ValidationError};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line framing the welcome banner and separating menu rounds
pub const SEPARATOR: &str = "----------------------------------------------";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INVALID_CHOICE_INPUT: &str = "Invalid input. Please enter a number from the menu.";
const INVALID_ACCOUNT_INPUT: &str = "Invalid input. Please enter a numeric account number.";
const INVALID_AMOUNT_INPUT: &str = "Invalid input. Please enter a numeric value for the amount.";
const INVALID_DEPOSIT_INPUT: &str = "Invalid input. Please enter a numeric value for the deposit.";

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Transfer,
    ListAccounts,
    Exit,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::CreateAccount),
            2 => Ok(MenuChoice::Deposit),
            3 => Ok(MenuChoice::Withdraw),
            4 => Ok(MenuChoice::CheckBalance),
            5 => Ok(MenuChoice::Transfer),
            6 => Ok(MenuChoice::ListAccounts),
            7 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Presentation options for the menu
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// Mask PINs in the admin account listing
    pub hide_pins: bool,
}

/// What the main loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Interactive session over a ledger
pub struct MenuSession<'a, N, R, W> {
    ledger: &'a mut Ledger<N>,
    prompter: Prompter<R, W>,
    config: MenuConfig,
}

impl<'a, N, R, W> MenuSession<'a, N, R, W>
where
    N: AccountNumberSource,
    R: BufRead,
    W: Write,
{
    pub fn new(ledger: &'a mut Ledger<N>, input: R, output: W, config: MenuConfig) -> Self {
        Self {
            ledger,
            prompter: Prompter::new(input, output),
            config,
        }
    }

    /// Consume the session and return the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    /// Run the menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Only I/O errors on the input or output are returned. Ledger errors
    /// are reported to the user and the menu continues.
    pub fn run(&mut self) -> io::Result<()> {
        self.say(SEPARATOR)?;
        self.say("   Welcome to the Simple Bank Management System")?;
        self.say(SEPARATOR)?;

        loop {
            self.write_menu()?;

            let Some(choice) = self
                .prompter
                .read_parsed::<i32>(CHOICE_PROMPT, INVALID_CHOICE_INPUT)?
            else {
                self.say("")?;
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let flow = match MenuChoice::try_from(choice) {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                Err(_) => {
                    self.say("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Continue => self.say(format!("\n{}\n", SEPARATOR))?,
                Flow::Exit => {
                    self.say(format!("\n{}\n", SEPARATOR))?;
                    return Ok(());
                }
                Flow::EndOfInput => {
                    self.say("")?;
                    debug!("input closed, leaving menu");
                    return Ok(());
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::CheckBalance => self.check_balance(),
            MenuChoice::Transfer => self.transfer(),
            MenuChoice::ListAccounts => self.list_accounts(),
            MenuChoice::Exit => {
                self.say("Thank you for using the Bank Management System. Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        for line in [
            "1. Create New Account",
            "2. Deposit Funds",
            "3. Withdraw Funds",
            "4. Check Balance",
            "5. Transfer Funds",
            "6. View All Accounts (Admin)",
            "7. Exit",
        ] {
            self.say(line)?;
        }
        Ok(())
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        self.say("\n--- Create New Account ---")?;

        if self.ledger.is_full() {
            let error = LedgerError::capacity_exceeded(self.ledger.capacity());
            self.say(failure_message(Operation::CreateAccount, &error))?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompter.read_line("Enter Account Holder Name: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let Some(initial_deposit) =
            self.prompter.read_with("Enter Initial Deposit Amount: $", |text| {
                let amount = parse_amount(text, INVALID_DEPOSIT_INPUT, "Initial deposit")?;
                validate_initial_deposit(amount)
                    .map_err(|e| amount_rejection("Initial deposit", &e))?;
                Ok(amount)
            })?
        else {
            return Ok(Flow::EndOfInput);
        };

        let pin = loop {
            let Some(pin) = self.prompter.read_line("Set a 4-digit PIN for your account: ")? else {
                return Ok(Flow::EndOfInput);
            };
            if Pin::parse(&pin).is_ok() {
                break pin;
            }
            self.say("PIN must be exactly 4 digits. Please try again.")?;
        };

        match self.ledger.create_account(name, initial_deposit, &pin) {
            Ok(account) => {
                self.say("Account created successfully!")?;
                self.say(format!("Account Holder: {}", account.holder_name()))?;
                self.say(format!("Account Number: {}", account.number()))?;
                self.say(format!("Initial Balance: ${}", money(account.balance())))?;
                self.say("Please remember your account number for future transactions.")?;
            }
            Err(e) => self.say(failure_message(Operation::CreateAccount, &e))?,
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        self.say("\n--- Deposit Funds ---")?;

        let Some(number) = self.read_account_number("Enter Account Number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if let Err(e) = self.ledger.find(number).map(|_| ()) {
            self.say(failure_message(Operation::Deposit, &e))?;
            return Ok(Flow::Continue);
        }

        let Some(amount) = self.read_amount("Enter Amount to Deposit: $", "Deposit")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.ledger.deposit(number, amount) {
            Ok(balance) => {
                self.say("Deposit successful!")?;
                self.say(format!("New Balance: ${}", money(balance)))?;
            }
            Err(e) => self.say(failure_message(Operation::Deposit, &e))?,
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        self.say("\n--- Withdraw Funds ---")?;

        let Some(number) = self.read_account_number("Enter Account Number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if let Err(e) = self.ledger.find(number).map(|_| ()) {
            self.say(failure_message(Operation::Withdraw, &e))?;
            return Ok(Flow::Continue);
        }

        let Some(pin) = self.prompter.read_line("Enter PIN: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if let Err(e) = self.ledger.authenticate(number, &pin).map(|_| ()) {
            self.say(failure_message(Operation::Withdraw, &e))?;
            return Ok(Flow::Continue);
        }

        let Some(amount) = self.read_amount("Enter Amount to Withdraw: $", "Withdrawal")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.ledger.withdraw(number, &pin, amount) {
            Ok(balance) => {
                self.say("Withdrawal successful!")?;
                self.say(format!("New Balance: ${}", money(balance)))?;
            }
            Err(e) => self.say(failure_message(Operation::Withdraw, &e))?,
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> io::Result<Flow> {
        self.say("\n--- Check Balance ---")?;

        let Some(number) = self.read_account_number("Enter Account Number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if let Err(e) = self.ledger.find(number).map(|_| ()) {
            self.say(failure_message(Operation::CheckBalance, &e))?;
            return Ok(Flow::Continue);
        }

        let Some(pin) = self.prompter.read_line("Enter PIN: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.ledger.check_balance(number, &pin) {
            Ok(statement) => {
                self.say(format!("Account Holder: {}", statement.holder_name))?;
                self.say(format!("Account Number: {}", statement.account_number))?;
                self.say(format!("Current Balance: ${}", money(statement.balance)))?;
            }
            Err(e) => self.say(failure_message(Operation::CheckBalance, &e))?,
        }
        Ok(Flow::Continue)
    }

    fn transfer(&mut self) -> io::Result<Flow> {
        self.say("\n--- Transfer Funds ---")?;

        let Some(source) = self.read_account_number("Enter Your Account Number (Source): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let operation = Operation::Transfer { source };
        if let Err(e) = self.ledger.find(source).map(|_| ()) {
            self.say(failure_message(operation, &e))?;
            return Ok(Flow::Continue);
        }

        let Some(pin) = self.prompter.read_line("Enter Your PIN: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if let Err(e) = self.ledger.authenticate(source, &pin).map(|_| ()) {
            self.say(failure_message(operation, &e))?;
            return Ok(Flow::Continue);
        }

        let Some(destination) = self.read_account_number("Enter Destination Account Number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if let Err(e) = self.ledger.find(destination).map(|_| ()) {
            self.say(failure_message(operation, &e))?;
            return Ok(Flow::Continue);
        }
        if source == destination {
            self.say(failure_message(operation, &LedgerError::self_transfer(source)))?;
            return Ok(Flow::Continue);
        }

        let Some(amount) = self.read_amount("Enter Amount to Transfer: $", "Transfer")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.ledger.transfer(source, &pin, destination, amount) {
            Ok(balance) => {
                self.say("Funds transferred successfully!")?;
                self.say(format!("Your New Balance: ${}", money(balance)))?;
            }
            Err(e) => self.say(failure_message(operation, &e))?,
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> io::Result<Flow> {
        self.say("\n--- All Bank Accounts ---")?;

        let accounts = self.ledger.list_accounts();
        if accounts.is_empty() {
            self.prompter.say("No accounts created yet.")?;
        } else {
            write_accounts_table(accounts, self.config.hide_pins, self.prompter.output())?;
        }
        Ok(Flow::Continue)
    }

    fn read_account_number(&mut self, prompt: &str) -> io::Result<Option<AccountNumber>> {
        Ok(self
            .prompter
            .read_parsed::<u32>(prompt, INVALID_ACCOUNT_INPUT)?
            .map(AccountNumber::from))
    }

    fn read_amount(&mut self, prompt: &str, label: &str) -> io::Result<Option<Decimal>> {
        self.prompter.read_with(prompt, |text| {
            let amount = parse_amount(text, INVALID_AMOUNT_INPUT, label)?;
            validate_amount(amount).map_err(|e| amount_rejection(label, &e))?;
            Ok(amount)
        })
    }

    fn say(&mut self, line: impl Display) -> io::Result<()> {
        self.prompter.say(line)
    }
}

/// Parse an entered amount, rejecting digits a `Decimal` would round away
fn parse_amount(text: &str, invalid: &str, label: &str) -> Result<Decimal, String> {
    let amount = text.parse::<Decimal>().map_err(|_| invalid.to_string())?;
    if Decimal::from_str_exact(text).is_err() {
        return Err(amount_rejection(
            label,
            &ValidationError::TooManyDecimalPlaces { amount },
        ));
    }
    Ok(amount)
}
