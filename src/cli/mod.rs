//! Command-line interface: argument parsing, `--version` and `--help`.
//!
//! ```ignore
//! use fetch_dogs::cli::{parse_args, run_cli_command, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::RunTui(options) => { /* start the TUI */ }
//!     other => run_cli_command(&other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions};
pub use version::{handle_version_command, VERSION};

use crate::startup::config::{ENV_BASE_URL, ENV_LOG, ENV_LOG_DIR};

/// Usage text for `--help`
pub fn usage() -> String {
    format!(
        "fetch-dogs {VERSION}
Browse adoptable dogs in the terminal.

USAGE:
    fetch-dogs [OPTIONS]

OPTIONS:
    --base-url <URL>        Service base URL
    --log-level <FILTER>    tracing filter, e.g. debug or fetch_dogs=trace
    -V, --version           Print version
    -h, --help              Print this help

ENVIRONMENT:
    {ENV_BASE_URL}     Service base URL
    {ENV_LOG}          tracing filter (default: info)
    {ENV_LOG_DIR}      Log directory (default: <cache dir>/fetch-dogs/logs)
"
    )
}

/// Run a non-TUI command. Returns false for `RunTui`, which the caller
/// handles itself.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            handle_version_command();
            true
        }
        CliCommand::Help => {
            print!("{}", usage());
            true
        }
        CliCommand::RunTui(_) => false,
    }
}
