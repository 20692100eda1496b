//! Command-line argument parsing.
//!
//! ```text
//! fetch-dogs [--base-url URL] [--log-level FILTER] [--version] [--help]
//! ```

use thiserror::Error;

/// Overrides for [`ClientConfig`](crate::startup::ClientConfig)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown argument: {0}")]
    Unknown(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

/// Parse command-line arguments (program name first).
///
/// `--version` and `--help` win over everything else. Values may be given as
/// `--flag value` or `--flag=value`.
///
/// # Examples
///
/// ```
/// use fetch_dogs::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["fetch-dogs".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--base-url" => {
                options.base_url = Some(take_value("--base-url", inline, &mut args)?);
            }
            "--log-level" => {
                options.log_level = Some(take_value("--log-level", inline, &mut args)?);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }
    Ok(CliCommand::RunTui(options))
}

fn take_value<I>(
    flag: &'static str,
    inline: Option<String>,
    rest: &mut I,
) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .filter(|v| !v.is_empty() && !v.starts_with("--"))
        .ok_or(ArgsError::MissingValue(flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["fetch-dogs".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(CliOptions::default())));
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--base-url", "http://x", "-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_options() {
        let expected = CliOptions {
            base_url: Some("http://localhost:8080".to_string()),
            log_level: Some("debug".to_string()),
        };
        assert_eq!(
            parse(&["--base-url", "http://localhost:8080", "--log-level", "debug"]),
            Ok(CliCommand::RunTui(expected.clone()))
        );
        assert_eq!(
            parse(&["--base-url=http://localhost:8080", "--log-level=debug"]),
            Ok(CliCommand::RunTui(expected))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--base-url"]),
            Err(ArgsError::MissingValue("--base-url"))
        );
        assert_eq!(
            parse(&["--log-level", "--base-url", "x"]),
            Err(ArgsError::MissingValue("--log-level"))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ArgsError::Unknown("--unknown".to_string()))
        );
    }
}
