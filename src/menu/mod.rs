//! Interactive menu module
//!
//! The text front end over the ledger.
//!
//! # Components
//!
//! - `prompt` - Line reading with re-prompt loops
//! - `render` - Money formatting, failure messages and the account table
//! - `session` - The numbered menu loop

pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::Prompter;
pub use render::{failure_message, money, write_accounts_table, Operation};
pub use session::{MenuChoice, MenuConfig, MenuSession, SEPARATOR};
