//! User-triggered actions. Anything that talks to the service is spawned and
//! reports back through `message_tx`.

use tracing::{debug, info, warn};

use super::{App, AppMessage, Focus, LOGIN_INCOMPLETE_MESSAGE};
use crate::error::ApiError;
use crate::models::User;

impl App {
    /// Submit the login form. Blank fields never reach the service.
    pub fn submit_login(&mut self) {
        if self.login.submitting {
            return;
        }
        if !self.login.is_complete() {
            self.login.error = Some(LOGIN_INCOMPLETE_MESSAGE.to_string());
            self.mark_dirty();
            return;
        }

        let user = User::new(self.login.name.trim(), self.login.email.trim());
        self.login.submitting = true;
        self.login.error = None;
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.login(&user).await {
                Ok(()) => AppMessage::LoginSucceeded { user },
                Err(error) => AppMessage::LoginFailed { error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Clear local state right away, then tell the service.
    ///
    /// The remote call is best-effort: the user is logged out locally even if
    /// it fails.
    pub fn logout(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        info!("logging out");
        self.clear_session_state();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let error = client.logout().await.err();
            let _ = tx.send(AppMessage::LogoutFinished { error });
        });
    }

    /// Fetch the breed catalogue.
    pub fn load_breeds(&mut self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.breeds().await {
                Ok(breeds) => AppMessage::BreedsLoaded { breeds },
                Err(error) => AppMessage::BreedsFailed { error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Search with the current criteria, then resolve the ids to dogs.
    ///
    /// The request is tagged with a fresh generation; only the response for
    /// the latest generation is applied.
    pub fn refresh_search(&mut self) {
        let generation = self.results.begin_request();
        let query = self.criteria.to_query();
        debug!(
            generation,
            page = self.criteria.page(),
            breeds = self.criteria.selected_breeds().len(),
            sort = %self.criteria.sort_expression(),
            "search"
        );
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = async {
                let page = client.search_dogs(&query).await?;
                let dogs = if page.result_ids.is_empty() {
                    Vec::new()
                } else {
                    client.dogs(&page.result_ids).await?
                };
                Ok::<_, ApiError>((dogs, page.total))
            }
            .await;

            let msg = match result {
                Ok((dogs, total)) => AppMessage::SearchCompleted {
                    generation,
                    dogs,
                    total,
                },
                Err(error) => AppMessage::SearchFailed { generation, error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Resolve the zip codes of the page loaded by `generation`. Failures are
    /// logged and otherwise ignored.
    pub(crate) fn load_locations(&mut self, generation: u64) {
        let zip_codes = self.results.zip_codes();
        if zip_codes.is_empty() {
            return;
        }

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.locations(&zip_codes).await {
                Ok(locations) => {
                    let _ = tx.send(AppMessage::LocationsLoaded {
                        generation,
                        locations,
                    });
                }
                Err(e) => warn!(generation, error = %e, "location lookup failed"),
            }
        });
    }

    /// Ask the service for a match among the favorites.
    ///
    /// Does nothing when favorites is empty or a match is already pending.
    pub fn request_match(&mut self) {
        if self.favorites.is_empty() {
            self.set_status("Add a favorite first to get a match.");
            return;
        }
        if self.match_loading {
            return;
        }
        let generation = self.begin_match();
        self.mark_dirty();

        let ids = self.favorites.ids();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = async {
                let matched = client.match_dogs(&ids).await?;
                client.dog(&matched.dog_id).await
            }
            .await;

            let msg = match result {
                Ok(dog) => AppMessage::MatchFound { generation, dog },
                Err(error) => AppMessage::MatchFailed { generation, error },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn dismiss_match(&mut self) {
        self.match_visible = false;
        self.mark_dirty();
    }

    /// Toggle the highlighted dog in the results table.
    pub fn toggle_selected_favorite(&mut self) {
        let Some(dog) = self.results.selected_dog().cloned() else {
            return;
        };
        if self.favorites.toggle(&dog) {
            self.set_status(format!("Added {} to favorites", dog.name));
        } else {
            self.clamp_favorites_cursor();
            self.set_status(format!("Removed {} from favorites", dog.name));
        }
    }

    /// Remove the highlighted entry of the favorites panel.
    pub fn remove_highlighted_favorite(&mut self) {
        let Some(dog) = self.favorites.get(self.favorites_cursor).cloned() else {
            return;
        };
        self.favorites.remove(&dog.id);
        self.clamp_favorites_cursor();
        self.set_status(format!("Removed {} from favorites", dog.name));
    }

    pub fn clear_favorites(&mut self) {
        if self.favorites.is_empty() {
            return;
        }
        self.favorites.clear();
        self.favorites_cursor = 0;
        self.set_status("Favorites cleared");
    }

    fn clamp_favorites_cursor(&mut self) {
        self.favorites_cursor = self
            .favorites_cursor
            .min(self.favorites.len().saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        if self.criteria.next_page(self.results.total()) {
            self.results.cursor_to_top();
            self.refresh_search();
        }
    }

    pub fn prev_page(&mut self) {
        if self.criteria.prev_page() {
            self.results.cursor_to_top();
            self.refresh_search();
        }
    }

    /// Flip ascending/descending. Keeps the current page.
    pub fn toggle_sort_order(&mut self) {
        self.criteria.toggle_sort_order();
        self.refresh_search();
    }

    /// Cycle breed -> name -> age. Keeps the current page.
    pub fn cycle_sort_field(&mut self) {
        self.criteria.cycle_sort_field();
        self.refresh_search();
    }

    /// Select or deselect the breed under the picker cursor.
    pub fn toggle_highlighted_breed(&mut self) {
        let Some(breed) = self.breeds.highlighted() else {
            return;
        };
        self.criteria.toggle_breed(&breed);
        self.results.cursor_to_top();
        self.refresh_search();
    }

    pub fn clear_breed_filter(&mut self) {
        if self.criteria.clear_breeds() {
            self.results.cursor_to_top();
            self.refresh_search();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.mark_dirty();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.mark_dirty();
    }

    pub fn focus_results(&mut self) {
        self.focus = Focus::Results;
        self.mark_dirty();
    }
}
