// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., an unknown option or a malformed value), or
/// `--help` is given, clap prints a message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
