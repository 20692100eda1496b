//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport used by the API client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
