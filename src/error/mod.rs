//! Error handling for fetch-dogs.
//!
//! - **[`ApiError`]**: every failure of a remote call, typed by cause
//! - **[`ErrorCategory`]**: high-level classification used by the
//!   controller to decide how a failure is surfaced
//!
//! | Category | Cause | Surfaced as |
//! |----------|-------|-------------|
//! | Network | connection, DNS, timeout | status line |
//! | Auth | rejected login, expired cookie | inline login message |
//! | Server | non-2xx status | status line |
//! | Client | undecodable payload | status line |

mod api;
mod category;

pub use api::ApiError;
pub use category::ErrorCategory;

/// Type alias for Results of API client operations.
pub type ApiResult<T> = Result<T, ApiError>;
