//! Version command.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command.
pub fn handle_version_command() {
    println!("fetch-dogs {}", VERSION);
}
