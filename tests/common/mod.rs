//! Common test utilities for integration tests.
//!
//! Builds an [`App`] on top of a [`MockHttpClient`] and drives it the way
//! the event loop does: actions spawn tasks, and the test pumps the
//! resulting messages back into `handle_message`.
//!
//! # Example
//!
//! ```ignore
//! let mock = MockService::new().with_breeds(&["Pug"]).build();
//! let mut harness = TestHarness::new(&mock);
//! harness.login("Ada", "ada@example.com").await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use fetch_dogs::api::ApiClient;
use fetch_dogs::app::{App, AppMessage, Screen};
use fetch_dogs::models::{Dog, Location};
use tokio::sync::mpsc::UnboundedReceiver;

/// Base URL the mock service answers on
pub const BASE_URL: &str = "http://mock";

/// How long to wait for a spawned task to report back
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(2);

pub fn test_dog(id: &str, name: &str, breed: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: format!("https://img.example/{}.jpg", id),
        name: name.to_string(),
        age: 3,
        zip_code: "60601".to_string(),
        breed: breed.to_string(),
    }
}

/// `count` dogs with ids d1..=dN.
pub fn test_dogs(count: usize) -> Vec<Dog> {
    (1..=count)
        .map(|i| test_dog(&format!("d{}", i), &format!("Dog {}", i), "Beagle"))
        .collect()
}

pub fn chicago() -> Location {
    Location {
        zip_code: "60601".to_string(),
        latitude: 41.88,
        longitude: -87.62,
        city: "Chicago".to_string(),
        state: "IL".to_string(),
        county: "Cook".to_string(),
    }
}

/// An app wired to a mock transport, with its message receiver held by the
/// test instead of the event loop.
pub struct TestHarness {
    pub app: App,
    rx: UnboundedReceiver<AppMessage>,
}

impl TestHarness {
    pub fn new(mock: &MockHttpClient) -> Self {
        let client = Arc::new(ApiClient::new(BASE_URL, Arc::new(mock.clone())));
        let mut app = App::new(client);
        let rx = app
            .message_rx
            .take()
            .expect("fresh app owns its receiver");
        Self { app, rx }
    }

    /// Wait for the next message without applying it.
    pub async fn next_message(&mut self) -> AppMessage {
        tokio::time::timeout(MESSAGE_TIMEOUT, self.rx.recv())
            .await
            .expect("timed out waiting for app message")
            .expect("message channel closed")
    }

    /// Apply messages until `done` holds for the app.
    pub async fn pump_until<F>(&mut self, mut done: F)
    where
        F: FnMut(&App) -> bool,
    {
        while !done(&self.app) {
            let msg = self.next_message().await;
            self.app.handle_message(msg);
        }
    }

    /// Apply messages until no request is in flight.
    pub async fn settle(&mut self) {
        self.pump_until(|app| !app.is_busy()).await;
        // Location lookups are not tracked as busy; give them a moment.
        while let Ok(Some(msg)) =
            tokio::time::timeout(Duration::from_millis(50), self.rx.recv()).await
        {
            self.app.handle_message(msg);
        }
    }

    /// Fill the login form, submit it and wait for the first page.
    pub async fn login(&mut self, name: &str, email: &str) {
        self.app.login.name = name.to_string();
        self.app.login.email = email.to_string();
        self.app.submit_login();
        self.pump_until(|app| app.screen == Screen::Search).await;
        self.settle().await;
    }
}
