//! Mock HTTP client for testing.
//!
//! Returns canned responses keyed by URL and records every request so tests
//! can assert on exactly what was sent to the service.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Full request URL, query string included
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// URL without the query string.
    pub fn path_url(&self) -> &str {
        strip_query(&self.url)
    }

    /// Parse the recorded body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status code)
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

impl MockResponse {
    /// 200 response with a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized; a fixture that fails to encode
    /// is a broken test.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).expect("mock response body must serialize");
        MockResponse::Success(Response::new(200, Bytes::from(body)))
    }

    /// Response with the given status and a plain text body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order for a request URL:
/// 1. exact match on the full URL
/// 2. match on the URL with its query string removed
/// 3. the default response, if one is set
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response("http://mock/dogs/breeds", MockResponse::json(&vec!["Pug"]));
/// let response = client.get("http://mock/dogs/breeds", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map(|(path, _)| path).unwrap_or(url)
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL (with or without query string).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests whose URL (query removed) equals `url`.
    pub fn requests_to(&self, url: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.path_url() == url)
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Clear all configured responses.
    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        if let Some(response) = responses.get(strip_query(url)) {
            return Some(response.clone());
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn respond(&self, url: &str) -> Result<Response, HttpError> {
        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond(url)
    }
}
