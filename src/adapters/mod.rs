//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest with a cookie jar
//!
//! The [`mock`] submodule provides [`mock::MockHttpClient`], a recording
//! test double used by the API and controller tests.

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
