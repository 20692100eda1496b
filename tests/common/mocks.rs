//! Canned service responses for integration tests.

pub use fetch_dogs::adapters::mock::http::MockResponse;
pub use fetch_dogs::adapters::MockHttpClient;
pub use fetch_dogs::traits::{Headers, HttpClient, HttpError, Response};

use fetch_dogs::models::{Dog, Location, SearchResponse};

use super::BASE_URL;

/// Full URL for a service path on the mock base.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// Builder over [`MockHttpClient`] for the service endpoints.
pub struct MockService {
    client: MockHttpClient,
}

impl MockService {
    /// A service where login and logout succeed and everything else is
    /// unconfigured.
    pub fn new() -> Self {
        let client = MockHttpClient::new();
        client.set_response(&url("/auth/login"), MockResponse::status(200, "OK"));
        client.set_response(&url("/auth/logout"), MockResponse::status(200, "OK"));
        Self { client }
    }

    pub fn with_breeds(self, breeds: &[&str]) -> Self {
        self.client
            .set_response(&url("/dogs/breeds"), MockResponse::json(&breeds.to_vec()));
        self
    }

    /// Search returns the ids of `dogs` with the given total; `/dogs`
    /// resolves them.
    pub fn with_dogs(self, dogs: &[Dog], total: usize) -> Self {
        let page = SearchResponse {
            result_ids: dogs.iter().map(|d| d.id.clone()).collect(),
            total,
            next: None,
            prev: None,
        };
        self.client
            .set_response(&url("/dogs/search"), MockResponse::json(&page));
        self.client
            .set_response(&url("/dogs"), MockResponse::json(&dogs.to_vec()));
        self
    }

    pub fn with_locations(self, locations: &[Location]) -> Self {
        self.client
            .set_response(&url("/locations"), MockResponse::json(&locations.to_vec()));
        self
    }

    pub fn with_match(self, dog_id: &str) -> Self {
        self.client.set_response(
            &url("/dogs/match"),
            MockResponse::json(&serde_json::json!({ "match": dog_id })),
        );
        self
    }

    /// Override any endpoint.
    pub fn with_response(self, path: &str, response: MockResponse) -> Self {
        self.client.set_response(&url(path), response);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}
