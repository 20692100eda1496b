//! UI rendering for fetch-dogs
//!
//! - Login screen: name/email form with inline errors
//! - Search screen: breed filter and favorites on the left, dog table on the
//!   right, pagination and key hints at the bottom
//! - Match dialog: overlay with the matched dog
//!
//! Rendering is a pure function of [`App`]; no state is changed here.

mod components;
mod footer;
mod helpers;
mod login;
mod match_dialog;
mod panels;
mod search;
mod theme;

pub use footer::contextual_keybinds;
pub use helpers::{format_age, truncate_to_width, SPINNER_FRAMES};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_HEADER};

use ratatui::Frame;

use crate::app::{App, Screen};
use login::render_login_screen;
use match_dialog::render_match_dialog;
use search::render_search_screen;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => render_login_screen(frame, app),
        Screen::Search => {
            render_search_screen(frame, app);
            render_match_dialog(frame, app);
        }
    }
}
