//! Error category classification.
//!
//! Categories decide how a failed call is surfaced: auth failures become an
//! inline message or a return to the login screen, everything else becomes a
//! transient status line.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS failure, timeout.
    Network,

    /// Rejected login or expired session cookie.
    Auth,

    /// The service answered with a non-2xx status other than 401.
    Server,

    /// The service answered with something this client cannot decode,
    /// or the request could not be built.
    Client,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Auth => "Authentication problem",
            ErrorCategory::Server => "Server-side issue",
            ErrorCategory::Client => "Unexpected response",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
