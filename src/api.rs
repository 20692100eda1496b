//! API client for the dog adoption service.
//!
//! One async method per remote operation. Every call is a single round trip
//! through the injected [`HttpClient`]; there is no retry, caching or
//! timeout at this layer. Requests and failures are logged here, once, so
//! callers only decide how to surface an error.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Dog, Location, LocationSearchQuery, LocationSearchResponse, Match, SearchQuery,
    SearchResponse, User, MAX_BATCH_SIZE,
};
use crate::traits::{Headers, HttpClient, Response};

/// Default base URL of the service
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Client for the dog adoption service.
///
/// Cheap to clone; clones share the transport and therefore the session
/// cookie.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL without trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url` on top of the given transport.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response to the matching error.
    fn check_status(operation: &'static str, response: Response) -> ApiResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let status = response.status;
        if status == 401 {
            return Err(ApiError::Unauthorized { operation });
        }
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Status {
            operation,
            status,
            message,
        })
    }

    fn decode<T: DeserializeOwned>(operation: &'static str, response: &Response) -> ApiResult<T> {
        response
            .json()
            .map_err(|source| ApiError::Decode { operation, source })
    }

    fn log_failure(err: &ApiError) {
        warn!(
            code = err.error_code(),
            category = %err.category(),
            error = %err,
            "request failed"
        );
    }

    async fn send_get(&self, operation: &'static str, path_and_query: &str) -> ApiResult<Response> {
        debug!(operation, method = "GET", path = path_and_query, "request");
        let result = self
            .http
            .get(&self.url(path_and_query), &Headers::new())
            .await
            .map_err(|source| ApiError::Transport { operation, source });
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                Self::log_failure(&err);
                return Err(err);
            }
        };
        debug!(operation, status = response.status, "response");
        Self::check_status(operation, response).inspect_err(Self::log_failure)
    }

    async fn send_post<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> ApiResult<Response> {
        let body = serde_json::to_string(body)
            .map_err(|source| ApiError::Encode { operation, source })
            .inspect_err(Self::log_failure)?;
        debug!(operation, method = "POST", path, "request");
        let result = self
            .http
            .post(&self.url(path), &body, &Headers::new())
            .await
            .map_err(|source| ApiError::Transport { operation, source });
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                Self::log_failure(&err);
                return Err(err);
            }
        };
        debug!(operation, status = response.status, "response");
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path_and_query: &str,
    ) -> ApiResult<T> {
        let response = self.send_get(operation, path_and_query).await?;
        Self::decode(operation, &response).inspect_err(Self::log_failure)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send_post(operation, path, body).await?;
        let response = Self::check_status(operation, response).inspect_err(Self::log_failure)?;
        Self::decode(operation, &response).inspect_err(Self::log_failure)
    }

    /// Start a session.
    ///
    /// POST /auth/login
    ///
    /// On success the service sets the session cookie, which the transport
    /// keeps for every later call. Any non-2xx status is a rejected login.
    pub async fn login(&self, user: &User) -> ApiResult<()> {
        let response = self.send_post("login", "/auth/login", user).await?;
        if !response.is_success() {
            let err = ApiError::LoginRejected {
                status: response.status,
            };
            Self::log_failure(&err);
            return Err(err);
        }
        info!(name = %user.name, "login succeeded");
        Ok(())
    }

    /// End the session.
    ///
    /// POST /auth/logout
    pub async fn logout(&self) -> ApiResult<()> {
        let response = self.send_post("logout", "/auth/logout", &serde_json::json!({})).await?;
        Self::check_status("logout", response).inspect_err(Self::log_failure)?;
        info!("logout succeeded");
        Ok(())
    }

    /// All breed names known to the service.
    ///
    /// GET /dogs/breeds
    pub async fn breeds(&self) -> ApiResult<Vec<String>> {
        self.get_json("breeds", "/dogs/breeds").await
    }

    /// Search the catalogue; returns one page of ids and the total count.
    ///
    /// GET /dogs/search
    pub async fn search_dogs(&self, query: &SearchQuery) -> ApiResult<SearchResponse> {
        let query_string = query.to_query_string();
        let path = if query_string.is_empty() {
            "/dogs/search".to_string()
        } else {
            format!("/dogs/search?{}", query_string)
        };
        self.get_json("search", &path).await
    }

    /// POST `items` in batches of at most [`MAX_BATCH_SIZE`] and concatenate
    /// the answers. An empty input sends nothing.
    async fn post_batched<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        items: &[String],
    ) -> ApiResult<Vec<T>> {
        let mut out = Vec::with_capacity(items.len());
        for batch in items.chunks(MAX_BATCH_SIZE) {
            let mut part: Vec<T> = self.post_json(operation, path, batch).await?;
            out.append(&mut part);
        }
        Ok(out)
    }

    /// Resolve dog ids to full records.
    ///
    /// POST /dogs
    pub async fn dogs(&self, ids: &[String]) -> ApiResult<Vec<Dog>> {
        self.post_batched("dogs", "/dogs", ids).await
    }

    /// Resolve a single dog id.
    ///
    /// POST /dogs with `[id]`; an empty answer is [`ApiError::NotFound`].
    pub async fn dog(&self, id: &str) -> ApiResult<Dog> {
        let mut dogs = self.dogs(&[id.to_string()]).await?;
        match dogs.iter().position(|d| d.id == id) {
            Some(index) => Ok(dogs.swap_remove(index)),
            None => {
                let err = ApiError::NotFound {
                    operation: "dogs",
                    id: id.to_string(),
                };
                Self::log_failure(&err);
                Err(err)
            }
        }
    }

    /// Ask the service to pick one dog out of `ids`.
    ///
    /// POST /dogs/match
    pub async fn match_dogs(&self, ids: &[String]) -> ApiResult<Match> {
        self.post_json("match", "/dogs/match", ids).await
    }

    /// Resolve zip codes to locations.
    ///
    /// POST /locations
    pub async fn locations(&self, zip_codes: &[String]) -> ApiResult<Vec<Location>> {
        self.post_batched("locations", "/locations", zip_codes).await
    }

    /// Search locations by city, state or bounding box.
    ///
    /// POST /locations/search
    ///
    /// No screen calls this yet; the dog table only resolves zip codes
    /// through [`ApiClient::locations`].
    pub async fn search_locations(
        &self,
        query: &LocationSearchQuery,
    ) -> ApiResult<LocationSearchResponse> {
        self.post_json("location_search", "/locations/search", query)
            .await
    }
}
