//! Bank Ledger CLI
//!
//! Interactive menu over an in-memory account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --capacity 10 --hide-pins
//! cargo run -- --seed 42 --verbose
//! ```
//!
//! All state lives in memory and is lost when the program exits.
//!
//! # Exit Codes
//!
//! - 0: Success (Exit chosen or input closed)
//! - 1: Error (stdin/stdout could not be read or written)

use bank_ledger::core::{Ledger, RandomAccountNumbers};
use bank_ledger::menu::MenuSession;
use bank_ledger::{cli, logging};
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(args.verbose);

    let config = args.to_ledger_config();
    let numbers = match args.seed {
        Some(seed) => RandomAccountNumbers::seeded(seed),
        None => RandomAccountNumbers::new(),
    };
    info!(capacity = config.capacity, seeded = args.seed.is_some(), "starting ledger");
    let mut ledger = Ledger::with_number_source(config, numbers);

    let stdin = io::stdin();
    let mut session = MenuSession::new(
        &mut ledger,
        stdin.lock(),
        io::stdout().lock(),
        args.to_menu_config(),
    );

    if let Err(e) = session.run() {
        error!(error = %e, "menu session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
