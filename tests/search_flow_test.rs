//! Searching, paging, sorting and breed filtering.

mod common;

use common::*;
use fetch_dogs::app::{AppMessage, Screen};
use fetch_dogs::models::SortOrder;

async fn logged_in(mock: &MockHttpClient) -> TestHarness {
    let mut harness = TestHarness::new(mock);
    harness.login("Ada", "ada@example.com").await;
    mock.clear_requests();
    harness
}

#[tokio::test]
async fn test_thirty_results_make_two_pages() {
    let mock = MockService::new()
        .with_breeds(&["Beagle"])
        .with_dogs(&test_dogs(25), 30)
        .with_locations(&[])
        .build();
    let mut harness = logged_in(&mock).await;

    assert!(!harness.app.criteria.has_prev());
    assert!(harness.app.criteria.has_next(30));

    harness.app.next_page();
    harness.settle().await;

    assert_eq!(harness.app.criteria.page(), 2);
    let search = &mock.requests_to(&url("/dogs/search"))[0];
    assert_eq!(
        search.url,
        url("/dogs/search?size=25&from=25&sort=breed%3Aasc")
    );

    // Last page: next is a no-op
    mock.clear_requests();
    harness.app.next_page();
    assert_eq!(harness.app.criteria.page(), 2);
    assert!(mock.requests_to(&url("/dogs/search")).is_empty());

    harness.app.prev_page();
    harness.settle().await;
    assert_eq!(harness.app.criteria.page(), 1);
}

#[tokio::test]
async fn test_breed_toggle_filters_and_resets_page() {
    let mock = MockService::new()
        .with_breeds(&["Beagle", "Pug"])
        .with_dogs(&test_dogs(25), 60)
        .with_locations(&[])
        .build();
    let mut harness = logged_in(&mock).await;
    harness.app.next_page();
    harness.settle().await;
    assert_eq!(harness.app.criteria.page(), 2);
    mock.clear_requests();

    harness.app.breeds.push_char('p');
    harness.app.breeds.push_char('u');
    harness.app.toggle_highlighted_breed();
    harness.settle().await;

    assert_eq!(harness.app.criteria.selected_breeds(), ["Pug"]);
    assert_eq!(harness.app.criteria.page(), 1);
    let search = &mock.requests_to(&url("/dogs/search"))[0];
    assert_eq!(
        search.url,
        url("/dogs/search?breeds[]=Pug&size=25&from=0&sort=breed%3Aasc")
    );

    mock.clear_requests();
    harness.app.clear_breed_filter();
    harness.settle().await;
    assert!(harness.app.criteria.selected_breeds().is_empty());
    assert_eq!(mock.requests_to(&url("/dogs/search")).len(), 1);
}

#[tokio::test]
async fn test_sort_change_keeps_page() {
    let mock = MockService::new()
        .with_breeds(&[])
        .with_dogs(&test_dogs(25), 60)
        .with_locations(&[])
        .build();
    let mut harness = logged_in(&mock).await;
    harness.app.next_page();
    harness.settle().await;
    mock.clear_requests();

    harness.app.toggle_sort_order();
    harness.settle().await;

    assert_eq!(harness.app.criteria.sort_order(), SortOrder::Desc);
    assert_eq!(harness.app.criteria.page(), 2);
    let search = &mock.requests_to(&url("/dogs/search"))[0];
    assert_eq!(
        search.url,
        url("/dogs/search?size=25&from=25&sort=breed%3Adesc")
    );
}

#[tokio::test]
async fn test_empty_result_skips_dog_lookup() {
    let mock = MockService::new()
        .with_breeds(&[])
        .with_dogs(&[], 0)
        .build();
    let harness = logged_in(&mock).await;

    assert!(harness.app.results.dogs().is_empty());
    assert_eq!(harness.app.results.total(), 0);
    assert!(!harness.app.criteria.has_next(0));
}

#[tokio::test]
async fn test_only_latest_search_is_applied() {
    let mock = MockService::new()
        .with_breeds(&[])
        .with_dogs(&test_dogs(2), 2)
        .with_locations(&[])
        .build();
    let mut harness = logged_in(&mock).await;

    // Two searches in flight; the older one answers last.
    harness.app.toggle_sort_order();
    let stale = harness.app.results.latest_generation();
    harness.app.cycle_sort_field();
    let latest = harness.app.results.latest_generation();
    assert!(latest > stale);

    harness.app.handle_message(AppMessage::SearchCompleted {
        generation: latest,
        dogs: vec![test_dog("new", "Newest", "Pug")],
        total: 1,
    });
    harness.app.handle_message(AppMessage::SearchCompleted {
        generation: stale,
        dogs: vec![test_dog("old", "Oldest", "Beagle")],
        total: 99,
    });

    assert_eq!(harness.app.results.total(), 1);
    assert_eq!(harness.app.results.dogs()[0].id, "new");
    assert!(!harness.app.results.is_loading());
}

#[tokio::test]
async fn test_search_failure_keeps_previous_results() {
    let mock = MockService::new()
        .with_breeds(&[])
        .with_dogs(&test_dogs(25), 30)
        .with_locations(&[])
        .build();
    let mut harness = logged_in(&mock).await;
    mock.set_response(
        &url("/dogs/search"),
        MockResponse::status(500, "Internal Server Error"),
    );

    harness.app.toggle_sort_order();
    harness.settle().await;

    assert_eq!(harness.app.screen, Screen::Search);
    assert_eq!(harness.app.results.dogs().len(), 25);
    assert!(harness.app.status.is_some());
}

#[tokio::test]
async fn test_expired_session_returns_to_login() {
    let mock = MockService::new()
        .with_breeds(&[])
        .with_dogs(&test_dogs(2), 2)
        .with_locations(&[])
        .build();
    let mut harness = logged_in(&mock).await;
    mock.set_response(
        &url("/dogs/search"),
        MockResponse::status(401, "Unauthorized"),
    );

    harness.app.toggle_sort_order();
    harness.settle().await;

    let app = &harness.app;
    assert_eq!(app.screen, Screen::Login);
    assert!(!app.session.is_authenticated());
    assert!(app.results.dogs().is_empty());
    assert!(app.login.error.is_some());
}

#[tokio::test]
async fn test_location_failure_is_ignored() {
    let mock = MockService::new()
        .with_breeds(&[])
        .with_dogs(&test_dogs(2), 2)
        .with_response("/locations", MockResponse::status(500, "boom"))
        .build();
    let harness = logged_in(&mock).await;

    assert_eq!(harness.app.screen, Screen::Search);
    assert_eq!(harness.app.results.dogs().len(), 2);
    assert!(harness.app.results.location("60601").is_none());
    assert!(harness.app.status.is_none());
}
