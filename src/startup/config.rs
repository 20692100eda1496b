//! Client configuration.
//!
//! Resolution order: defaults, then environment, then command-line flags.

use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;
use crate::cli::CliOptions;

/// Base URL of the service
pub const ENV_BASE_URL: &str = "FETCH_DOGS_BASE_URL";
/// `tracing` filter directive, e.g. `debug` or `fetch_dogs=trace`
pub const ENV_LOG: &str = "FETCH_DOGS_LOG";
/// Directory for the rolling log file
pub const ENV_LOG_DIR: &str = "FETCH_DOGS_LOG_DIR";

/// Default `tracing` filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for the client.
///
/// # Example
///
/// ```
/// use fetch_dogs::startup::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_log_filter("debug");
/// assert_eq!(config.base_url, "http://localhost:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL
    pub base_url: String,
    /// Log directory; `None` when no cache directory exists, which disables
    /// file logging
    pub log_dir: Option<PathBuf>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_dir: default_log_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// `<cache dir>/fetch-dogs/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("fetch-dogs").join("logs"))
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `FETCH_DOGS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    /// Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = get(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            config = config.with_log_dir(dir);
        }
        config
    }

    /// Apply command-line flags on top.
    pub fn with_cli_options(mut self, options: &CliOptions) -> Self {
        if let Some(url) = &options.base_url {
            self.base_url = url.clone();
        }
        if let Some(filter) = &options.log_level {
            self.log_filter = filter.clone();
        }
        self
    }
}
