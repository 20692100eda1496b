//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::models::{Dog, Location, User};

/// Results of spawned API calls, applied by [`App::handle_message`](super::App::handle_message)
#[derive(Debug)]
pub enum AppMessage {
    /// `POST /auth/login` succeeded
    LoginSucceeded { user: User },
    /// `POST /auth/login` failed (rejected or unreachable)
    LoginFailed { error: ApiError },
    /// Remote logout finished; local state was already cleared
    LogoutFinished { error: Option<ApiError> },
    /// Breed catalogue loaded
    BreedsLoaded { breeds: Vec<String> },
    BreedsFailed { error: ApiError },
    /// A page of dogs for search `generation`
    SearchCompleted {
        generation: u64,
        dogs: Vec<Dog>,
        total: usize,
    },
    SearchFailed { generation: u64, error: ApiError },
    /// Locations for the zip codes of page `generation`
    LocationsLoaded {
        generation: u64,
        locations: Vec<Location>,
    },
    /// Match request `generation` resolved to a full dog record
    MatchFound { generation: u64, dog: Dog },
    MatchFailed { generation: u64, error: ApiError },
}

impl AppMessage {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::LoginSucceeded { .. } => "login_succeeded",
            AppMessage::LoginFailed { .. } => "login_failed",
            AppMessage::LogoutFinished { .. } => "logout_finished",
            AppMessage::BreedsLoaded { .. } => "breeds_loaded",
            AppMessage::BreedsFailed { .. } => "breeds_failed",
            AppMessage::SearchCompleted { .. } => "search_completed",
            AppMessage::SearchFailed { .. } => "search_failed",
            AppMessage::LocationsLoaded { .. } => "locations_loaded",
            AppMessage::MatchFound { .. } => "match_found",
            AppMessage::MatchFailed { .. } => "match_failed",
        }
    }
}
