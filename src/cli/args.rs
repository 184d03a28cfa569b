use crate::core::{LedgerConfig, DEFAULT_CAPACITY};
use crate::menu::MenuConfig;
use clap::Parser;

/// Interactive in-memory bank account ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive in-memory bank account ledger", long_about = None)]
pub struct CliArgs {
    /// Maximum number of accounts the ledger holds
    #[arg(
        long = "capacity",
        value_name = "COUNT",
        help = "Maximum number of accounts (default: 100, range: 1-900000)"
    )]
    pub capacity: Option<usize>,

    /// Seed for account-number generation
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed the account-number generator for reproducible runs"
    )]
    pub seed: Option<u64>,

    /// Mask PINs in the admin account listing
    #[arg(long = "hide-pins", help = "Show **** instead of PINs in the account listing")]
    pub hide_pins: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", help = "Log ledger activity to stderr")]
    pub verbose: bool,
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// Uses the provided capacity if any, otherwise the default. Invalid
    /// capacities fall back to the default inside `LedgerConfig::new`.
    pub fn to_ledger_config(&self) -> LedgerConfig {
        match self.capacity {
            Some(capacity) => LedgerConfig::new(capacity),
            None => LedgerConfig::default(),
        }
    }

    /// Create a MenuConfig from CLI arguments
    pub fn to_menu_config(&self) -> MenuConfig {
        MenuConfig {
            hide_pins: self.hide_pins,
        }
    }
}
