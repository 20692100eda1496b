//! ApiClient over the real reqwest transport, against a wiremock server.
//!
//! Covers what the mock transport cannot: the session cookie set by login is
//! replayed on later calls, and status codes map to the right errors.

use std::sync::Arc;

use fetch_dogs::adapters::ReqwestHttpClient;
use fetch_dogs::api::ApiClient;
use fetch_dogs::error::ApiError;
use fetch_dogs::models::{SearchQuery, SortField, SortOrder, User};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COOKIE: &str = "fetch-access-token=test-token";

fn client_for(server: &MockServer) -> ApiClient {
    let http = ReqwestHttpClient::new().expect("reqwest client");
    ApiClient::new(server.uri(), Arc::new(http))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(
            serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{}; Path=/; HttpOnly", COOKIE).as_str())
                .set_body_string("OK"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_session_cookie_is_replayed_after_login() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/dogs/breeds"))
        .and(header("cookie", COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec!["Beagle", "Pug"]))
        .mount(&server)
        .await;
    // Anything without the cookie is unauthorized
    Mock::given(method("GET"))
        .and(path("/dogs/breeds"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let before = client.breeds().await;
    assert!(matches!(before, Err(ApiError::Unauthorized { .. })));

    client
        .login(&User::new("Ada", "ada@example.com"))
        .await
        .expect("login");
    let breeds = client.breeds().await.expect("breeds after login");
    assert_eq!(breeds, vec!["Beagle", "Pug"]);
}

#[tokio::test]
async fn test_rejected_login_maps_to_login_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .login(&User::new("Ada", "nope"))
        .await;

    assert!(matches!(result, Err(ApiError::LoginRejected { status: 400 })));
}

#[tokio::test]
async fn test_search_sends_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dogs/search"))
        .and(query_param("breeds[]", "Pug"))
        .and(query_param("size", "25"))
        .and(query_param("from", "25"))
        .and(query_param("sort", "name:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultIds": ["d26", "d27"],
            "total": 27,
            "prev": "/dogs/search?size=25&from=0"
        })))
        .mount(&server)
        .await;

    let query = SearchQuery {
        breeds: vec!["Pug".to_string()],
        size: Some(25),
        from: Some(25),
        sort: Some(SearchQuery::sort_expression(SortField::Name, SortOrder::Desc)),
        ..Default::default()
    };
    let page = client_for(&server)
        .search_dogs(&query)
        .await
        .expect("search");

    assert_eq!(page.result_ids, vec!["d26", "d27"]);
    assert_eq!(page.total, 27);
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_match_posts_id_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dogs/match"))
        .and(body_json(serde_json::json!(["d1", "d2"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "match": "d2" })))
        .mount(&server)
        .await;

    let ids = vec!["d1".to_string(), "d2".to_string()];
    let matched = client_for(&server).match_dogs(&ids).await.expect("match");

    assert_eq!(matched.dog_id, "d2");
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Nothing listens on the discard port
    let client = ApiClient::new(
        "http://127.0.0.1:9",
        Arc::new(ReqwestHttpClient::new().expect("reqwest client")),
    );

    let result = client.breeds().await;

    assert!(matches!(result, Err(ApiError::Transport { .. })));
}
