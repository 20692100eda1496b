//! Message handling for the App.

use tracing::{debug, info, warn};

use super::{App, AppMessage, Focus, Screen, LOGIN_FAILED_MESSAGE};
use crate::error::ApiError;

impl App {
    /// Handle an incoming async message.
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        debug!(kind = msg.kind(), "app message");
        match msg {
            AppMessage::LoginSucceeded { user } => {
                self.login.submitting = false;
                if self.screen != Screen::Login {
                    return;
                }
                info!(name = %user.name, "session started");
                self.session.authenticate(user);
                self.login.reset();
                self.focus = Focus::Results;
                self.screen = Screen::Search;
                self.load_breeds();
                self.refresh_search();
            }
            AppMessage::LoginFailed { error } => {
                self.login.submitting = false;
                debug!(code = error.error_code(), "login failed");
                self.login.error = Some(LOGIN_FAILED_MESSAGE.to_string());
            }
            AppMessage::LogoutFinished { error } => {
                // Local state was cleared when logout started.
                if let Some(e) = error {
                    warn!(error = %e, "remote logout failed; local session already cleared");
                }
            }
            AppMessage::BreedsLoaded { breeds } => {
                if !self.session.is_authenticated() {
                    return;
                }
                debug!(count = breeds.len(), "breeds loaded");
                self.breeds.set_catalogue(breeds);
            }
            AppMessage::BreedsFailed { error } => {
                self.handle_api_failure(&error);
            }
            AppMessage::SearchCompleted {
                generation,
                dogs,
                total,
            } => {
                if self.results.apply(generation, dogs, total) {
                    self.load_locations(generation);
                } else {
                    debug!(
                        generation,
                        latest = self.results.latest_generation(),
                        "discarding stale search response"
                    );
                }
            }
            AppMessage::SearchFailed { generation, error } => {
                if self.results.fail(generation) {
                    self.handle_api_failure(&error);
                } else {
                    debug!(generation, "discarding stale search failure");
                }
            }
            AppMessage::LocationsLoaded {
                generation,
                locations,
            } => {
                self.results.set_locations(generation, locations);
            }
            AppMessage::MatchFound { generation, dog } => {
                if generation != self.match_generation {
                    debug!(generation, latest = self.match_generation, "discarding stale match");
                    return;
                }
                self.match_loading = false;
                if !self.session.is_authenticated() {
                    return;
                }
                info!(dog_id = %dog.id, "match found");
                self.matched = Some(dog);
                self.match_visible = true;
            }
            AppMessage::MatchFailed { generation, error } => {
                if generation != self.match_generation {
                    debug!(generation, "discarding stale match failure");
                    return;
                }
                self.match_loading = false;
                // The previous match, if any, stays as it was.
                self.handle_api_failure(&error);
            }
        }
    }

    /// Surface a failed call. An expired session goes back to login;
    /// anything else becomes a status line and leaves state intact.
    fn handle_api_failure(&mut self, error: &ApiError) {
        if !self.session.is_authenticated() {
            return;
        }
        if error.is_session_expired() {
            info!("session expired");
            self.clear_session_state();
            self.login.error = Some(error.user_message());
            return;
        }
        self.set_status(error.user_message());
    }
}
