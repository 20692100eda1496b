//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which search panel has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! Remote calls never block the UI loop. Actions spawn a task that performs
//! the call(s) and sends an [`AppMessage`] back through `message_tx`; the loop
//! applies it with [`App::handle_message`]. All state changes therefore
//! happen on the loop task.

mod actions;
mod handlers;
mod keys;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, LoginField, LoginForm, Screen, StatusMessage};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::Dog;
use crate::state::{BreedPicker, Favorites, SearchCriteria, SearchResults, SessionState};

/// Inline message for any failed login attempt
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
/// Inline prompt when a form field is blank
pub const LOGIN_INCOMPLETE_MESSAGE: &str = "Please enter your name and email.";
/// Ticks a status message stays visible (~4s at 16ms per tick)
pub const STATUS_TTL_TICKS: u64 = 250;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Focused panel on the search screen
    pub focus: Focus,
    pub login: LoginForm,
    pub session: SessionState,
    pub favorites: Favorites,
    /// Highlighted row in the favorites panel
    pub favorites_cursor: usize,
    pub criteria: SearchCriteria,
    pub results: SearchResults,
    pub breeds: BreedPicker,
    /// Last resolved match; kept when a later match request fails
    pub matched: Option<Dog>,
    /// Match dialog is open
    pub match_visible: bool,
    /// A match request is in flight
    pub match_loading: bool,
    /// Tag of the latest match request; replies with another tag are dropped
    pub match_generation: u64,
    /// Transient status line
    pub status: Option<StatusMessage>,
    /// API client shared with spawned tasks
    pub client: Arc<ApiClient>,
    /// Receiver for async messages; taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
}

impl App {
    /// Create a new App instance on top of an API client
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            screen: Screen::default(),
            focus: Focus::default(),
            login: LoginForm::default(),
            session: SessionState::new(),
            favorites: Favorites::new(),
            favorites_cursor: 0,
            criteria: SearchCriteria::new(),
            results: SearchResults::new(),
            breeds: BreedPicker::new(),
            matched: None,
            match_visible: false,
            match_loading: false,
            match_generation: 0,
            status: None,
            client,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Something is in flight and a spinner is on screen
    pub fn is_busy(&self) -> bool {
        self.login.submitting || self.results.is_loading() || self.match_loading
    }

    /// Advance animations and expire the status line.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
        if let Some(status) = &self.status {
            if self.tick_count.saturating_sub(status.set_at) >= STATUS_TTL_TICKS {
                self.status = None;
                self.mark_dirty();
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            set_at: self.tick_count,
        });
        self.mark_dirty();
    }

    /// Start a match request and return its generation.
    pub(crate) fn begin_match(&mut self) -> u64 {
        self.match_generation += 1;
        self.match_loading = true;
        self.match_generation
    }

    /// Drop every piece of session-scoped state and show the login screen.
    ///
    /// In-flight search and match responses are invalidated by bumping their
    /// generations.
    pub(crate) fn clear_session_state(&mut self) {
        self.session.reset();
        self.favorites.clear();
        self.favorites_cursor = 0;
        self.criteria = SearchCriteria::new();
        self.results.reset();
        self.breeds.reset();
        self.matched = None;
        self.match_visible = false;
        self.match_loading = false;
        self.match_generation += 1;
        self.status = None;
        self.login.reset();
        self.focus = Focus::default();
        self.screen = Screen::Login;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;

    fn app() -> App {
        App::new(Arc::new(ApiClient::new(
            "http://mock",
            Arc::new(MockHttpClient::new()),
        )))
    }

    #[test]
    fn test_new_app_starts_on_login() {
        let app = app();
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.session.is_authenticated());
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
        assert!(!app.is_busy());
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut app = app();
        app.set_status("hello");
        for _ in 0..STATUS_TTL_TICKS - 1 {
            app.tick();
        }
        assert!(app.status.is_some());
        app.tick();
        assert!(app.status.is_none());
    }

    #[test]
    fn test_tick_marks_dirty_only_when_busy() {
        let mut app = app();
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);

        app.results.begin_request();
        app.tick();
        assert!(app.needs_redraw);
    }
}
